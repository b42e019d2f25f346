use phf::{Map, phf_map};

/// Nucleotide residue names mapped to their one-letter base code.
static NUCLEOTIDE_CODES: Map<&'static str, char> = phf_map! {
    "A" => 'A', "G" => 'G', "C" => 'C', "U" => 'U', "T" => 'T', "I" => 'I',
    "DA" => 'A', "DG" => 'G', "DC" => 'C', "DT" => 'T', "DU" => 'U', "DI" => 'I',
    "RA" => 'A', "RG" => 'G', "RC" => 'C', "RU" => 'U',
    "ADE" => 'A', "GUA" => 'G', "CYT" => 'C', "URA" => 'U', "URI" => 'U', "THY" => 'T',
    "RA5" => 'A', "RA3" => 'A', "RG5" => 'G', "RG3" => 'G',
    "RC5" => 'C', "RC3" => 'C', "RU5" => 'U', "RU3" => 'U',
    "DA5" => 'A', "DA3" => 'A', "DG5" => 'G', "DG3" => 'G',
    "DC5" => 'C', "DC3" => 'C', "DT5" => 'T', "DT3" => 'T',
};

/// One-letter base code for a nucleotide residue name, if recognised.
pub fn nucleotide_code(residue_name: &str) -> Option<char> {
    NUCLEOTIDE_CODES.get(residue_name.trim()).copied()
}

/// Purines (A, G, I) attach through N9; pyrimidines through N1.
pub fn is_purine(residue_name: &str) -> Option<bool> {
    nucleotide_code(residue_name).map(|code| matches!(code, 'A' | 'G' | 'I'))
}

/// The label written in the residue-type report column: the one-letter code when
/// recognised, otherwise the residue name as read.
pub fn residue_type_label(residue_name: &str) -> String {
    match nucleotide_code(residue_name) {
        Some(code) => code.to_string(),
        None if residue_name.trim().is_empty() => "?".to_string(),
        None => residue_name.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nucleotide_code_recognises_rna_and_dna_names() {
        assert_eq!(nucleotide_code("G"), Some('G'));
        assert_eq!(nucleotide_code("DA"), Some('A'));
        assert_eq!(nucleotide_code("URA"), Some('U'));
        assert_eq!(nucleotide_code("RC5"), Some('C'));
    }

    #[test]
    fn nucleotide_code_trims_whitespace_and_is_case_sensitive() {
        assert_eq!(nucleotide_code("  C"), Some('C'));
        assert_eq!(nucleotide_code("da"), None);
    }

    #[test]
    fn nucleotide_code_returns_none_for_amino_acids() {
        assert_eq!(nucleotide_code("ALA"), None);
        assert_eq!(nucleotide_code(""), None);
    }

    #[test]
    fn is_purine_classifies_bases() {
        assert_eq!(is_purine("A"), Some(true));
        assert_eq!(is_purine("DG"), Some(true));
        assert_eq!(is_purine("U"), Some(false));
        assert_eq!(is_purine("DC"), Some(false));
        assert_eq!(is_purine("HOH"), None);
    }

    #[test]
    fn residue_type_label_falls_back_to_residue_name() {
        assert_eq!(residue_type_label("DT"), "T");
        assert_eq!(residue_type_label("PSU"), "PSU");
        assert_eq!(residue_type_label("   "), "?");
    }
}

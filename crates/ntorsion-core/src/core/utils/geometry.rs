use nalgebra::Point3;

/// Below this product of plane-normal magnitudes the four points are treated as
/// collinear and the torsion is reported as zero.
const DEGENERATE_NORMAL_PRODUCT: f64 = 1e-8;

/// Torsion angle in degrees about the `p2`-`p3` bond for the chain `p1-p2-p3-p4`.
///
/// The cosine comes from the angle between the plane normals `b1 x b2` and
/// `b2 x b3`. The result is negated when `(b2 x n1) . b3` is negative. Collinear
/// or coincident input yields exactly `0.0`.
pub fn dihedral(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>, p4: &Point3<f64>) -> f64 {
    let b1 = p2 - p1;
    let b2 = p3 - p2;
    let b3 = p4 - p3;

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);

    let norm_product = n1.norm() * n2.norm();
    if norm_product <= DEGENERATE_NORMAL_PRODUCT {
        return 0.0;
    }

    let cosine = (n1.dot(&n2) / norm_product).clamp(-1.0, 1.0);
    let angle = cosine.acos();

    let triple = b2.cross(&n1);
    let signed = if triple.dot(&b3) < 0.0 { -angle } else { angle };

    signed.to_degrees()
}

/// Bond angle in degrees at the central point `p2`.
///
/// Returns `None` if either arm has zero length.
pub fn bond_angle(p1: &Point3<f64>, p2: &Point3<f64>, p3: &Point3<f64>) -> Option<f64> {
    let v1 = p1 - p2;
    let v2 = p3 - p2;
    let norm_product = v1.norm() * v2.norm();
    if norm_product == 0.0 {
        return None;
    }
    Some((v1.dot(&v2) / norm_product).clamp(-1.0, 1.0).acos().to_degrees())
}

pub fn distance(p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    (p2 - p1).norm()
}

//! Finite field arithmetic for prime-power orders
//!
//! Elements of GF(p^k) are encoded as integers `0..p^k` whose base-p digits
//! are the coefficients of a polynomial over GF(p) (lowest digit first).
//! Multiplication reduces modulo the first monic irreducible polynomial of
//! degree k found by enumeration. For prime orders this is plain modular
//! arithmetic.

/// Addition and multiplication tables for one finite field
#[derive(Debug, Clone)]
pub struct GaloisField {
    order: usize,
    add: Vec<u32>,
    mul: Vec<u32>,
}

impl GaloisField {
    /// Build GF(q), or `None` when q is not a prime power
    pub fn new(q: u32) -> Option<Self> {
        let (p, k) = prime_power(q)?;
        let q = q as usize;
        let modulus = find_irreducible(p, k);

        let mut add = vec![0u32; q * q];
        let mut mul = vec![0u32; q * q];
        for a in 0..q {
            let da = to_digits(a, p, k);
            for b in 0..q {
                let db = to_digits(b, p, k);
                let sum: Vec<usize> = da.iter().zip(&db).map(|(x, y)| (x + y) % p).collect();
                add[a * q + b] = from_digits(&sum, p) as u32;
                mul[a * q + b] = from_digits(&mul_mod(&da, &db, &modulus, p), p) as u32;
            }
        }

        Some(Self {
            order: q,
            add,
            mul,
        })
    }

    pub fn add(&self, a: u32, b: u32) -> u32 {
        self.add[a as usize * self.order + b as usize]
    }

    pub fn mul(&self, a: u32, b: u32) -> u32 {
        self.mul[a as usize * self.order + b as usize]
    }
}

/// Decompose q as p^k with p prime
pub fn prime_power(q: u32) -> Option<(usize, usize)> {
    if q < 2 {
        return None;
    }
    let q = q as usize;
    let p = (2..=q).find(|d| q % d == 0)?;
    let mut rest = q;
    let mut k = 0;
    while rest % p == 0 {
        rest /= p;
        k += 1;
    }
    if rest == 1 {
        Some((p, k))
    } else {
        None
    }
}

fn to_digits(mut value: usize, p: usize, k: usize) -> Vec<usize> {
    let mut digits = Vec::with_capacity(k);
    for _ in 0..k {
        digits.push(value % p);
        value /= p;
    }
    digits
}

fn from_digits(digits: &[usize], p: usize) -> usize {
    digits.iter().rev().fold(0, |acc, d| acc * p + d)
}

/// Remainder of `f` divided by the monic polynomial `g`
fn poly_rem(f: &[usize], g: &[usize], p: usize) -> Vec<usize> {
    let mut rem = f.to_vec();
    let dg = g.len() - 1;
    while rem.len() > dg {
        let top = rem.len() - 1;
        let c = rem[top];
        if c != 0 {
            let shift = top - dg;
            for (i, gi) in g.iter().enumerate() {
                rem[shift + i] = (rem[shift + i] + p * p - c * gi % p) % p;
            }
        }
        rem.pop();
    }
    rem
}

fn mul_mod(a: &[usize], b: &[usize], modulus: &[usize], p: usize) -> Vec<usize> {
    let k = modulus.len() - 1;
    let mut product = vec![0usize; a.len() + b.len()];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            product[i + j] = (product[i + j] + x * y) % p;
        }
    }
    let mut rem = poly_rem(&product, modulus, p);
    rem.resize(k, 0);
    rem
}

/// Monic polynomial of degree `degree` whose lower coefficients are the
/// base-p digits of `index`
fn monic(index: usize, p: usize, degree: usize) -> Vec<usize> {
    let mut coeffs = to_digits(index, p, degree);
    coeffs.push(1);
    coeffs
}

fn is_irreducible(f: &[usize], p: usize) -> bool {
    let degree = f.len() - 1;
    for d in 1..=degree / 2 {
        for index in 0..p.pow(d as u32) {
            let g = monic(index, p, d);
            if poly_rem(f, &g, p).iter().all(|&c| c == 0) {
                return false;
            }
        }
    }
    true
}

fn find_irreducible(p: usize, k: usize) -> Vec<usize> {
    // x is irreducible for k = 1; for k > 1 some monic irreducible always exists
    (0..p.pow(k as u32))
        .map(|index| monic(index, p, k))
        .find(|f| is_irreducible(f, p))
        .unwrap_or_else(|| monic(0, p, k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SUPPORTED_ORDERS;

    #[test]
    fn test_prime_power_decomposition() {
        assert_eq!(prime_power(7), Some((7, 1)));
        assert_eq!(prime_power(8), Some((2, 3)));
        assert_eq!(prime_power(9), Some((3, 2)));
        assert_eq!(prime_power(27), Some((3, 3)));
        assert_eq!(prime_power(6), None);
        assert_eq!(prime_power(1), None);
    }

    #[test]
    fn test_prime_field_is_modular() {
        let f = GaloisField::new(7).unwrap();
        for a in 0..7 {
            for b in 0..7 {
                assert_eq!(f.add(a, b), (a + b) % 7);
                assert_eq!(f.mul(a, b), (a * b) % 7);
            }
        }
    }

    #[test]
    fn test_non_prime_power_rejected() {
        assert!(GaloisField::new(6).is_none());
        assert!(GaloisField::new(12).is_none());
    }

    #[test]
    fn test_every_supported_order_is_a_field() {
        for &q in SUPPORTED_ORDERS.iter() {
            let f = GaloisField::new(q).unwrap();
            for a in 1..q {
                let inverses = (1..q).filter(|&b| f.mul(a, b) == 1).count();
                assert_eq!(inverses, 1, "element {} of GF({}) needs one inverse", a, q);
            }
        }
    }

    #[test]
    fn test_gf4_distributes() {
        let f = GaloisField::new(4).unwrap();
        for a in 0..4 {
            for b in 0..4 {
                for c in 0..4 {
                    assert_eq!(f.mul(a, f.add(b, c)), f.add(f.mul(a, b), f.mul(a, c)));
                }
            }
        }
    }
}

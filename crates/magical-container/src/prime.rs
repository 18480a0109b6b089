//! Primality test used to maintain the prime index.

/// Returns `true` if `value` is prime.
///
/// A value is prime if it is greater than 1 and no integer in
/// `2..=floor(sqrt(value))` divides it. Zero, one, and every negative value
/// are not prime.
///
/// # Examples
///
/// ```
/// use magical_container::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(-7));
/// assert!(!is_prime(91)); // 7 * 13
/// ```
#[must_use]
pub fn is_prime(value: i32) -> bool {
    if value <= 1 {
        return false;
    }
    // `k <= value / k` is `k * k <= value` without overflow near `i32::MAX`.
    let mut k = 2;
    while k <= value / k {
        if value % k == 0 {
            return false;
        }
        k += 1;
    }
    true
}

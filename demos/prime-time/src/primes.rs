//! Primality.

/// Whether `n` is prime, by trial division.
///
/// Numbers below 2 are not prime.
#[must_use]
pub const fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }

    let mut divisor = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

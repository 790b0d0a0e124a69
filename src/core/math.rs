//! Number-theory helpers.
//!
//! All functions are pure. Operations that can overflow a `u64` return
//! `Option` instead of wrapping or panicking.

/// A prime is a natural number greater than 1 with no divisors other than
/// 1 and itself.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // i <= n / i avoids overflowing i * i for large n
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// n!, or `None` once the product exceeds `u64::MAX` (n > 20).
pub fn factorial(n: u64) -> Option<u64> {
    let mut product: u64 = 1;
    for i in 2..=n {
        product = product.checked_mul(i)?;
    }
    Some(product)
}

/// Whether `n` equals k! for some k. 1 counts (0! and 1!).
pub fn is_factorial(n: u64) -> bool {
    if n < 1 {
        return false;
    }

    let mut product: u64 = 1;
    let mut i: u64 = 2;
    while product < n {
        product = match product.checked_mul(i) {
            Some(p) => p,
            None => return false,
        };
        i += 1;
    }
    product == n
}

/// Greatest common divisor via the Euclidean algorithm.
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, `None` on overflow.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// The nth Fibonacci number (0-indexed), `None` on overflow (n > 92).
pub fn fibonacci(n: u64) -> Option<u64> {
    if n <= 1 {
        return Some(n);
    }

    let (mut a, mut b) = (0u64, 1u64);
    for _ in 2..=n {
        let next = a.checked_add(b)?;
        (a, b) = (b, next);
    }
    Some(b)
}

/// The first `n` Fibonacci numbers. Stops early if a term would overflow.
pub fn fibonacci_sequence(n: usize) -> impl Iterator<Item = u64> {
    let mut state = (0u64, 1u64);
    (0..n).map_while(move |i| match i {
        0 => Some(0),
        1 => Some(1),
        _ => {
            let next = state.0.checked_add(state.1)?;
            state = (state.1, next);
            Some(next)
        }
    })
}

/// Whether `n` is the square of an integer.
pub fn is_perfect_square(n: u64) -> bool {
    let root = (n as f64).sqrt() as u64;
    // The float estimate can be off by one at the extremes
    (root.saturating_sub(1)..=root.saturating_add(1))
        .any(|r| r.checked_mul(r) == Some(n))
}

pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

pub fn is_odd(n: i64) -> bool {
    n % 2 != 0
}

pub fn is_power_of_two(n: u64) -> bool {
    n > 0 && n & (n - 1) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes_are_detected() {
        assert!(is_prime(2));
        assert!(is_prime(7));
        assert!(is_prime(97));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(!is_prime(10));
        assert!(!is_prime(91)); // 7 * 13
    }

    #[test]
    fn factorial_handles_base_cases_and_overflow() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(10), Some(3_628_800));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }

    #[test]
    fn factorial_membership() {
        assert!(is_factorial(1));
        assert!(is_factorial(24));
        assert!(is_factorial(120));
        assert!(!is_factorial(0));
        assert!(!is_factorial(100));
    }

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(gcd(48, 18), 6);
        assert_eq!(gcd(100, 50), 50);
        assert_eq!(gcd(17, 19), 1);
        assert_eq!(gcd(0, 5), 5);

        assert_eq!(lcm(12, 18), Some(36));
        assert_eq!(lcm(5, 7), Some(35));
        assert_eq!(lcm(0, 9), Some(0));
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), None);
    }

    #[test]
    fn fibonacci_values() {
        assert_eq!(fibonacci(0), Some(0));
        assert_eq!(fibonacci(1), Some(1));
        assert_eq!(fibonacci(10), Some(55));
        assert_eq!(fibonacci(20), Some(6765));
        assert_eq!(fibonacci(92), Some(7_540_113_804_746_346_429));
        assert_eq!(fibonacci(93), None);
    }

    #[test]
    fn fibonacci_sequence_yields_first_n() {
        let seq: Vec<u64> = fibonacci_sequence(7).collect();
        assert_eq!(seq, vec![0, 1, 1, 2, 3, 5, 8]);
        assert!(fibonacci_sequence(0).next().is_none());
        assert_eq!(fibonacci_sequence(1).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn perfect_squares() {
        assert!(is_perfect_square(0));
        assert!(is_perfect_square(1));
        assert!(is_perfect_square(16));
        assert!(is_perfect_square(4_294_967_295u64 * 4_294_967_295u64));
        assert!(!is_perfect_square(20));
        assert!(!is_perfect_square(u64::MAX));
    }

    #[test]
    fn parity() {
        assert!(is_even(4));
        assert!(is_even(-2));
        assert!(is_even(0));
        assert!(!is_even(7));
        assert!(is_odd(7));
        assert!(is_odd(-3));
        assert!(!is_odd(4));
    }

    #[test]
    fn powers_of_two() {
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(8));
        assert!(is_power_of_two(1 << 63));
        assert!(!is_power_of_two(0));
        assert!(!is_power_of_two(10));
    }
}

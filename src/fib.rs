/// Fibonacci number at the 1-based index `n`, or `None` for `n == 0`.
///
/// Computed by naive double recursion with no caching, so the cost grows as
/// roughly φⁿ calls. Values past F(93) wrap modulo 2^64.
pub fn fib(n: u32) -> Option<u64> {
    if n == 0 {
        return None;
    }
    Some(naive(n))
}

fn naive(n: u32) -> u64 {
    if n <= 2 {
        1
    } else {
        naive(n - 1).wrapping_add(naive(n - 2))
    }
}

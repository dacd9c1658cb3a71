//! Counting helpers: factorial tables modulo a prime, binomial and
//! permutation counts, Lucas' theorem, Pascal's triangle.

use super::modular::ModInt;
use super::{One, Zero};

/// Precomputed factorials and inverse factorials modulo the prime `M`,
/// answering binomial and permutation queries in O(1).
///
/// ```
/// use quiver::math::Binomial;
///
/// let comb = Binomial::<1_000_000_007>::new(100);
/// assert_eq!(comb.binomial(10, 3).value(), 120);
/// ```
#[derive(Clone, Debug)]
pub struct Binomial<const M: u64> {
    fact: Vec<ModInt<M>>,
    inv_fact: Vec<ModInt<M>>,
}

impl<const M: u64> Binomial<M> {
    /// Builds the tables for arguments up to and including `max_n`.
    ///
    /// `M` must be a prime larger than `max_n`, otherwise the factorials hit
    /// a multiple of `M` and everything after it degenerates to zero.
    /// O(max_n)
    pub fn new(max_n: usize) -> Self {
        assert!(
            (max_n as u64) < M,
            "factorial table of length {max_n} needs a modulus larger than that"
        );
        let mut fact = Vec::with_capacity(max_n + 1);
        fact.push(ModInt::ONE);
        for i in 1..=max_n {
            fact.push(fact[i - 1] * i as u64);
        }

        // One inversion, then roll it down: 1/i! = (1/(i+1)!) * (i+1).
        let mut inv_fact = vec![ModInt::ONE; max_n + 1];
        inv_fact[max_n] = fact[max_n].inverse();
        for i in (0..max_n).rev() {
            inv_fact[i] = inv_fact[i + 1] * (i as u64 + 1);
        }

        Self { fact, inv_fact }
    }

    /// The largest argument the tables cover.
    pub fn max_n(&self) -> usize {
        self.fact.len() - 1
    }

    /// `n!`
    pub fn factorial(&self, n: usize) -> ModInt<M> {
        assert!(
            n <= self.max_n(),
            "Argument {n} is out of bounds of factorial table length {}",
            self.max_n()
        );
        self.fact[n]
    }

    /// `1 / n!`
    pub fn inverse_factorial(&self, n: usize) -> ModInt<M> {
        assert!(
            n <= self.max_n(),
            "Argument {n} is out of bounds of factorial table length {}",
            self.max_n()
        );
        self.inv_fact[n]
    }

    /// `n` choose `k`; zero when `k > n`.
    pub fn binomial(&self, n: usize, k: usize) -> ModInt<M> {
        if k > n {
            return ModInt::ZERO;
        }
        self.factorial(n) * self.inv_fact[k] * self.inv_fact[n - k]
    }

    /// The number of ordered arrangements of `k` out of `n`; zero when
    /// `k > n`.
    pub fn permutations(&self, n: usize, k: usize) -> ModInt<M> {
        if k > n {
            return ModInt::ZERO;
        }
        self.factorial(n) * self.inv_fact[n - k]
    }

    /// The `n`-th Catalan number.
    pub fn catalan(&self, n: usize) -> ModInt<M> {
        self.binomial(2 * n, n) - self.binomial(2 * n, n + 1)
    }

    /// `n` choose `k` by Lucas' theorem, for `n` and `k` far beyond the
    /// table: both are split into base-`M` digits and the digit binomials
    /// are multiplied. Needs the table to cover `M - 1`.
    /// O(log_M n)
    pub fn lucas(&self, mut n: u64, mut k: u64) -> ModInt<M> {
        assert!(
            self.max_n() as u64 >= M - 1,
            "lucas needs the factorial table to cover all base-{M} digits"
        );
        let mut result = ModInt::ONE;
        while k > 0 {
            result *= self.binomial((n % M) as usize, (k % M) as usize);
            n /= M;
            k /= M;
        }
        result
    }
}

/// `n` choose `k` without a modulus, exact as long as the answer fits in a
/// `u64`. Intermediate products go through `u128`, so they don't overflow
/// first.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 1..=k {
        // result == C(n - k + i - 1, i - 1), so the division is exact.
        result = (result as u128 * (n - k + i) as u128 / i as u128) as u64;
    }
    result
}

/// The first `rows` rows of Pascal's triangle. Row `n` has `n + 1` entries.
///
/// Everything fits in a `u64` for `rows <= 68`, which the function asserts.
/// O(rows²)
pub fn binomial_table(rows: usize) -> Vec<Vec<u64>> {
    assert!(rows <= 68, "Pascal's triangle overflows u64 past row 67");
    let mut table: Vec<Vec<u64>> = Vec::with_capacity(rows);
    for n in 0..rows {
        let mut row = vec![1u64; n + 1];
        for k in 1..n {
            row[k] = table[n - 1][k - 1] + table[n - 1][k];
        }
        table.push(row);
    }
    table
}

/// Integer and floating-point arithmetic: `+ - * / % mod rem`.
pub mod scalar;

/// Exponentiation: `**` and `pow`.
pub mod power;

/// Integer bit operations: `& | ^ << >>`.
pub mod bitwise;

/// Boolean connectives: `&&` and `||`.
pub mod logic;

/// Comparisons, including the approximate equality operator `~=`.
pub mod comparison;

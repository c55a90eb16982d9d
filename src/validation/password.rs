/// Minimum-strength rules a password must satisfy.
///
/// The policy has two axes: a minimum length (counted in characters) and four
/// required character categories (uppercase, lowercase, digit, symbol).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    /// Characters that count as a symbol.
    pub symbols: &'static str,
}

/// Version 1 of the password policy.
pub const PASSWORD_POLICY_V1: PasswordPolicy = PasswordPolicy {
    min_length: 8,
    symbols: "!@#$%^&*()_+-=[]{}|;:'\",.<>/?`~\\",
};

impl PasswordPolicy {
    /// Returns `true` when `password` meets every rule of this policy.
    ///
    /// Uppercase/lowercase/digit checks are ASCII-only; non-ASCII letters
    /// count toward the length but satisfy no category.
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        if password.chars().count() < self.min_length {
            return false;
        }

        let mut upper = false;
        let mut lower = false;
        let mut digit = false;
        let mut symbol = false;

        for c in password.chars() {
            match c {
                'A'..='Z' => upper = true,
                'a'..='z' => lower = true,
                '0'..='9' => digit = true,
                c if self.symbols.contains(c) => symbol = true,
                _ => {}
            }
        }

        upper && lower && digit && symbol
    }
}

/// Checks `password` against [`PASSWORD_POLICY_V1`].
///
/// # Examples
/// ```
/// use user_service::validation::password::is_valid_password;
///
/// assert!(is_valid_password("1amAp0k3m0n%"));
/// assert!(!is_valid_password("123456"));
/// ```
pub fn is_valid_password(password: &str) -> bool {
    PASSWORD_POLICY_V1.is_satisfied_by(password)
}

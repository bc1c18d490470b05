//! 管理画面のパスワードゲート

/// 共有パスワードの既定値
pub const DEFAULT_ADMIN_PASSWORD: &str = "adoul123";

/// 認証方式
pub trait Authenticator {
    fn verify(&self, candidate: &str) -> bool;
}

/// 単一の共有パスワードとの完全一致
#[derive(Debug, Clone)]
pub struct SharedPassword {
    password: String,
}

impl SharedPassword {
    pub fn new(password: impl Into<String>) -> Self {
        Self { password: password.into() }
    }
}

impl Default for SharedPassword {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_PASSWORD)
    }
}

impl Authenticator for SharedPassword {
    fn verify(&self, candidate: &str) -> bool {
        candidate == self.password
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked,
}

/// ゲート本体
///
/// Locked → Unlocked のみ。ログアウトは無い。
#[derive(Debug)]
pub struct AdminGate<A> {
    auth: A,
    state: GateState,
}

impl<A: Authenticator> AdminGate<A> {
    pub fn new(auth: A) -> Self {
        Self { auth, state: GateState::Locked }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// 入力値を検証し、遷移後の状態を返す
    pub fn unlock(&mut self, candidate: &str) -> GateState {
        if self.auth.verify(candidate) {
            self.state = GateState::Unlocked;
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_locked() {
        let gate = AdminGate::new(SharedPassword::default());
        assert_eq!(gate.state(), GateState::Locked);
    }

    #[test]
    fn test_correct_password_unlocks() {
        let mut gate = AdminGate::new(SharedPassword::default());
        assert_eq!(gate.unlock("adoul123"), GateState::Unlocked);
        assert!(gate.is_unlocked());
    }

    #[test]
    fn test_wrong_password_stays_locked() {
        let mut gate = AdminGate::new(SharedPassword::default());
        for candidate in ["", "adoul", "ADOUL123", " adoul123"] {
            assert_eq!(gate.unlock(candidate), GateState::Locked);
        }
    }

    #[test]
    fn test_no_relock_after_unlock() {
        let mut gate = AdminGate::new(SharedPassword::new("secret"));
        gate.unlock("secret");
        assert_eq!(gate.unlock("wrong"), GateState::Unlocked);
    }

    #[test]
    fn test_custom_authenticator() {
        struct AnyNonEmpty;
        impl Authenticator for AnyNonEmpty {
            fn verify(&self, candidate: &str) -> bool {
                !candidate.is_empty()
            }
        }

        let mut gate = AdminGate::new(AnyNonEmpty);
        assert_eq!(gate.unlock(""), GateState::Locked);
        assert_eq!(gate.unlock("x"), GateState::Unlocked);
    }
}

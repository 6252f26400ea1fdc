//! ワンショット・リビール
//!
//! 要素が初めて閾値以上可視になったことを一度だけ通知する状態機械。
//! 交差比率の観測はWASM側（IntersectionObserver）が行い、
//! ここは比率を受け取って発火判定だけを持つ。

/// 監視設定
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// 発火に必要な可視比率（0.0〜1.0）
    pub threshold: f64,
    /// 検知ボックスを広げるマージン（px）
    pub root_margin_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_px: 50.0,
        }
    }
}

/// 監視対象1要素ぶんの状態
///
/// 発火はfalse→trueの一方向で、観測セッション中に高々1回。
/// 再マウント時は新しいRevealStateを作り直す。
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 交差比率を受け取り、初めて閾値に達したときだけtrueを返す
    ///
    /// 一度発火したら、その後の出入りでは二度と発火しない。
    pub fn on_intersection(&mut self, config: &RevealConfig, ratio: f64) -> bool {
        if self.revealed {
            return false;
        }
        if ratio >= config.threshold {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_config_default() {
        let config = RevealConfig::default();
        assert_eq!(config.threshold, 0.1);
        assert_eq!(config.root_margin_px, 50.0);
    }

    #[test]
    fn test_reveal_fires_at_threshold() {
        let config = RevealConfig::default();
        let mut state = RevealState::new();
        assert!(!state.is_revealed());
        assert!(state.on_intersection(&config, 0.1));
        assert!(state.is_revealed());
    }

    #[test]
    fn test_reveal_below_threshold() {
        let config = RevealConfig::default();
        let mut state = RevealState::new();
        assert!(!state.on_intersection(&config, 0.0));
        assert!(!state.on_intersection(&config, 0.05));
        assert!(!state.is_revealed());
    }

    #[test]
    fn test_reveal_fires_exactly_once() {
        // 何度出入りしても発火は1回だけ
        let config = RevealConfig::default();
        let mut state = RevealState::new();
        let events = [0.0, 0.05, 0.5, 0.0, 0.9, 0.0, 1.0];

        let fired: usize = events
            .iter()
            .filter(|&&ratio| state.on_intersection(&config, ratio))
            .count();
        assert_eq!(fired, 1);
        assert!(state.is_revealed());
    }

    #[test]
    fn test_reveal_new_session_fires_again() {
        // 再マウント＝新しい状態なら再び発火できる
        let config = RevealConfig::default();
        let mut first = RevealState::new();
        assert!(first.on_intersection(&config, 1.0));

        let mut second = RevealState::new();
        assert!(second.on_intersection(&config, 1.0));
    }

    #[test]
    fn test_reveal_custom_threshold() {
        let config = RevealConfig {
            threshold: 0.5,
            root_margin_px: 0.0,
        };
        let mut state = RevealState::new();
        assert!(!state.on_intersection(&config, 0.4));
        assert!(state.on_intersection(&config, 0.5));
    }
}

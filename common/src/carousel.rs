//! カルーセルのインデックス計算
//!
//! 横スクロールのカード列について、スクロール位置から
//! 現在のカードindexと前後ボタンの活性状態を計算する。
//! ジオメトリはDOMから読んだ平データとして受け取り、
//! ブラウザ環境なしでテストできる純関数に保つ。

/// スクロール終端判定の許容誤差（px、端数ピクセル対策）
pub const SCROLL_EPSILON: f64 = 10.0;

/// カルーセルのレイアウト定数
///
/// カード幅・間隔・ブレークポイントは見た目由来の設定値なので
/// 呼び出し側から渡す（アルゴリズム側にマジックナンバーを持たない）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    /// カード1枚の幅（px）
    pub card_width: f64,
    /// カード間の間隔（px）
    pub gap: f64,
    /// モバイル/デスクトップ切り替えのビューポート幅（px）
    pub breakpoint: f64,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self {
            card_width: 320.0,
            gap: 24.0,
            breakpoint: 768.0,
        }
    }
}

/// 表示モード（ブレークポイントで切り替え）
///
/// デスクトップはカード左揃え、モバイルは中央揃えで
/// index計算とscroll先計算の整列規則が変わる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Desktop,
    Mobile,
}

impl CarouselLayout {
    /// ビューポート幅からモードを決定
    pub fn mode(&self, viewport_width: f64) -> LayoutMode {
        if viewport_width < self.breakpoint {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }
}

/// スクロールコンテナのジオメトリ（DOM読み取り値のスナップショット）
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollGeometry {
    pub scroll_left: f64,
    pub container_width: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

/// 現在位置のカードindexを計算する
///
/// デスクトップ: 先頭に揃っているカード。
/// モバイル: ビューポート中央にあるカード。
///
/// target_offsetの逆写像として、定位置オフセットが現在のスクロール位置に
/// 最も近いindexを選ぶ。これによりモバイル先頭付近の0クランプ
/// （コンテナが広いとindex 0の定位置が負になりスクロール0に丸められる）
/// でもscroll_to_index → 再計算がずれない。
pub fn current_index(
    layout: &CarouselLayout,
    mode: LayoutMode,
    geometry: &ScrollGeometry,
    item_count: usize,
) -> usize {
    if item_count == 0 {
        return 0;
    }
    let distance = |index: usize| -> f64 {
        (target_offset(layout, mode, geometry, index) - geometry.scroll_left).abs()
    };
    (0..item_count)
        .min_by(|&a, &b| {
            distance(a)
                .partial_cmp(&distance(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .unwrap_or(0)
}

/// 左（前）へスクロールできるか
pub fn can_scroll_left(geometry: &ScrollGeometry) -> bool {
    geometry.scroll_left > 0.0
}

/// 右（次）へスクロールできるか
pub fn can_scroll_right(geometry: &ScrollGeometry) -> bool {
    geometry.scroll_left < geometry.scroll_width - geometry.client_width - SCROLL_EPSILON
}

/// index番のカードを定位置に置くスクロール量
///
/// current_indexと同じ整列規則（デスクトップ左揃え、モバイル中央揃え）。
/// 負にはならない。
pub fn target_offset(
    layout: &CarouselLayout,
    mode: LayoutMode,
    geometry: &ScrollGeometry,
    index: usize,
) -> f64 {
    let offset = match mode {
        LayoutMode::Desktop => index as f64 * layout.card_width,
        LayoutMode::Mobile => {
            index as f64 * (layout.card_width + layout.gap) - geometry.container_width / 2.0
                + layout.card_width / 2.0
        }
    };
    offset.max(0.0)
}

use super::SceneNode;

/// Pairwise paint relation between two nodes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RenderOrder {
    /// The first node is further back and must be painted first.
    Before,
    /// The two never visually interact; no constraint.
    Any,
    /// The first node is nearer and must be painted second.
    After,
}

impl RenderOrder {
    /// The same relation seen from the other node.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            RenderOrder::Before => RenderOrder::After,
            RenderOrder::Any => RenderOrder::Any,
            RenderOrder::After => RenderOrder::Before,
        }
    }

    #[inline]
    pub fn is_decisive(self) -> bool {
        self != RenderOrder::Any
    }
}

/// Decides whether `a` must be painted before or after `b`.
///
/// Rules, first decisive one wins:
/// 1. Footprints overlap along X: the smaller `min.y` is further back.
///    Footprints overlap along Y: the larger `min.x` is further back.
///    Equal minima defer to `min.z` (the lower solid goes first).
/// 2. Neither footprint axis decided and the Z ranges are disjoint: `Any`.
/// 3. Otherwise the outlines decide: a node whose side or base edges cut the
///    other's roof is behind it. Crossing both ways, or neither, is `Any`.
///
/// The result is antisymmetric: `draw_order(a, b) == draw_order(b, a).reverse()`.
/// It is deliberately not a total order; `Any` pairs get no graph edge.
pub fn draw_order(a: &SceneNode, b: &SceneNode) -> RenderOrder {
    let (ab, bb) = (a.bounds(), b.bounds());

    if ab.overlaps_x(bb) {
        if let Some(order) = settle(ab.min().y, bb.min().y, a, b) {
            return order;
        }
    }

    if ab.overlaps_y(bb) {
        // Larger X sits further up the screen, so the comparison flips.
        if let Some(order) = settle(bb.min().x, ab.min().x, a, b) {
            return order;
        }
    }

    if !ab.overlaps_z(bb) {
        return RenderOrder::Any;
    }

    match (a.intersects_top(b), b.intersects_top(a)) {
        (true, false) => RenderOrder::Before,
        (false, true) => RenderOrder::After,
        _ => RenderOrder::Any,
    }
}

/// `Before` when `a_key < b_key`, falling back to the lower `min.z`.
fn settle(a_key: f64, b_key: f64, a: &SceneNode, b: &SceneNode) -> Option<RenderOrder> {
    compare(a_key, b_key).or_else(|| compare(a.min_z(), b.min_z()))
}

#[inline]
fn compare(a: f64, b: f64) -> Option<RenderOrder> {
    if a < b {
        Some(RenderOrder::Before)
    } else if a > b {
        Some(RenderOrder::After)
    } else {
        None
    }
}

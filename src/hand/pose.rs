//! Pointing Pose Gate
//!
//! Decides whether the operator is deliberately pointing: index finger
//! extended, the other three fingers folded. Only when this gate passes
//! does the cursor follow the hand; gestures are recognized either way.
//!
//! The test compares each fingertip against its middle (PIP) joint on the
//! vertical image axis alone: extended means the tip sits above the joint
//! (smaller y), folded means below. Strict inequalities, no thresholds, no
//! hysteresis. This is known to misjudge a hand that is rolled or pointing
//! sideways; the single-axis semantics are kept on purpose.

use crate::hand::landmarks::{
    HandObservation, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP,
    RING_TIP,
};

/// True iff the hand posture qualifies as "intentionally pointing".
///
/// Stateless; recomputed fresh every frame.
pub fn is_index_pointing(hand: &HandObservation) -> bool {
    let index_extended = hand.point(INDEX_TIP).y < hand.point(INDEX_PIP).y;
    let middle_folded = hand.point(MIDDLE_TIP).y > hand.point(MIDDLE_PIP).y;
    let ring_folded = hand.point(RING_TIP).y > hand.point(RING_PIP).y;
    let pinky_folded = hand.point(PINKY_TIP).y > hand.point(PINKY_PIP).y;

    index_extended && middle_folded && ring_folded && pinky_folded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::landmarks::{Point, LANDMARK_COUNT};

    /// Hand with index raised and the other fingers curled: tips below
    /// their PIP joints except the index tip above its PIP.
    fn pointing_hand() -> Vec<Point> {
        let mut points = vec![Point::new(300.0, 400.0); LANDMARK_COUNT];
        points[INDEX_TIP] = Point::new(300.0, 200.0);
        points[INDEX_PIP] = Point::new(300.0, 300.0);
        points[MIDDLE_TIP] = Point::new(320.0, 420.0);
        points[MIDDLE_PIP] = Point::new(320.0, 380.0);
        points[RING_TIP] = Point::new(340.0, 420.0);
        points[RING_PIP] = Point::new(340.0, 380.0);
        points[PINKY_TIP] = Point::new(360.0, 420.0);
        points[PINKY_PIP] = Point::new(360.0, 380.0);
        points
    }

    #[test]
    fn test_pointing_posture_passes() {
        let hand = HandObservation::from_points(&pointing_hand()).unwrap();
        assert!(is_index_pointing(&hand));
    }

    #[test]
    fn test_curled_index_fails() {
        let mut points = pointing_hand();
        points[INDEX_TIP] = Point::new(300.0, 350.0); // below PIP
        let hand = HandObservation::from_points(&points).unwrap();
        assert!(!is_index_pointing(&hand));
    }

    #[test]
    fn test_extended_middle_fails() {
        let mut points = pointing_hand();
        points[MIDDLE_TIP] = Point::new(320.0, 300.0); // above PIP
        let hand = HandObservation::from_points(&points).unwrap();
        assert!(!is_index_pointing(&hand));
    }

    #[test]
    fn test_open_palm_fails() {
        // All tips above their PIPs: index passes but nothing is folded.
        let mut points = pointing_hand();
        points[MIDDLE_TIP] = Point::new(320.0, 300.0);
        points[RING_TIP] = Point::new(340.0, 300.0);
        points[PINKY_TIP] = Point::new(360.0, 300.0);
        let hand = HandObservation::from_points(&points).unwrap();
        assert!(!is_index_pointing(&hand));
    }

    #[test]
    fn test_equal_heights_fail_both_ways() {
        // Tip exactly level with its joint is neither extended nor folded.
        let mut points = pointing_hand();
        points[INDEX_TIP] = Point::new(300.0, 300.0); // == INDEX_PIP y
        let hand = HandObservation::from_points(&points).unwrap();
        assert!(!is_index_pointing(&hand));

        let mut points = pointing_hand();
        points[RING_TIP] = Point::new(340.0, 380.0); // == RING_PIP y
        let hand = HandObservation::from_points(&points).unwrap();
        assert!(!is_index_pointing(&hand));
    }
}

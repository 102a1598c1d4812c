/*!
The activity database: variable activity, ordered for the decision procedure.

# Representation

The [decision procedure](crate::procedures::decision) requires iteration over atoms in descending
activity, with a stable position across bumps and backtracks.
Activity is therefore kept two ways:
- A per-atom score.
- A map from score to the set of atoms currently holding that score, iterated descending.

A pair of cursors --- the current score bucket and the position within it --- persist across calls
to decide, so a decision does not sweep from the top of the map every time.
After any operation which may expose higher-activity atoms (a backtrack, a restart, a rescale) a
reset is requested, and the next decision lower-bounds the outer cursor at the highest activity
among the atoms made unassigned.
The cursors are a resume hint, nothing more: the map is the authority on order.

Scores are floats, keyed through a total order ([f64::total_cmp]).
No score is ever NaN — scores only ever sum nonnegative increments or divide by the rescale
threshold — so the total order agrees with the usual comparison everywhere it is used.

# Rescaling

Growth of the bump increment is unbounded, so all scores are bounded by a rescale threshold.
On exceeding it every score, the increment, and the resume point are divided by the threshold and
the map rebuilt, merging buckets which collide after rounding.

# Literal scores

The occurrence count per literal for the LITSCORE value heuristic also lives here, indexed by the
dense literal encoding.
*/

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    config::{Activity, Config},
    misc::log::targets,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// A score as a map key, ordered by [f64::total_cmp].
#[derive(Clone, Copy, Debug)]
struct ScoreKey(Activity);

impl PartialEq for ScoreKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == std::cmp::Ordering::Equal
    }
}

impl Eq for ScoreKey {}

impl PartialOrd for ScoreKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoreKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// The persistent decision cursors: a score bucket, and the last atom inspected within it.
#[derive(Clone, Copy)]
struct Cursor {
    score: Activity,
    position: Option<Atom>,
}

/// The activity database.
pub struct ActivityDB {
    /// The activity of each atom, indexed by atoms.
    score: Vec<Activity>,

    /// Atoms bucketed by score. Atoms with a zero score are not in the map.
    buckets: BTreeMap<ScoreKey, BTreeSet<Atom>>,

    /// The amount by which to bump, grown by `1 / decay` each conflict.
    var_inc: Activity,

    /// Where a cursor reset resumes: the highest activity among atoms made unassigned.
    resume_at: Activity,

    /// The decision cursors, [None] when exhausted.
    cursor: Option<Cursor>,

    /// Whether the cursors should be repositioned before the next decision.
    reset_pending: bool,

    /// Occurrence counts per literal, indexed by the dense literal encoding.
    literal_score: Vec<usize>,

    /// The decay factor: the bump increment is multiplied by `1 / decay` per conflict.
    decay: Activity,

    /// The bound on scores; on exceeding it everything is divided by it.
    rescale_threshold: Activity,
}

impl ActivityDB {
    /// A database over atoms 1..=`count`.
    pub fn new(count: usize, config: &Config) -> Self {
        ActivityDB {
            score: vec![0.0; count + 1],
            buckets: BTreeMap::new(),
            var_inc: 1.0,
            resume_at: 0.0,
            cursor: None,
            reset_pending: true,
            literal_score: vec![0; 2 * count + 2],
            decay: config.variable_decay.value,
            rescale_threshold: config.rescale_threshold.value,
        }
    }

    /// The activity of an atom.
    pub fn score_of(&self, atom: Atom) -> Activity {
        self.score[atom as usize]
    }

    /// Bumps the activity of an atom, moving it between score buckets and rescaling everything if
    /// the bound is exceeded.
    pub fn bump(&mut self, atom: Atom) {
        let score = self.score[atom as usize];
        if score > 0.0 {
            if let Some(bucket) = self.buckets.get_mut(&ScoreKey(score)) {
                bucket.remove(&atom);
                if bucket.is_empty() {
                    self.buckets.remove(&ScoreKey(score));
                }
            }
        }

        let new_score = score + self.var_inc;
        self.score[atom as usize] = new_score;

        if new_score > self.rescale_threshold {
            self.rescale();
        }

        let new_score = self.score[atom as usize];
        self.buckets.entry(ScoreKey(new_score)).or_default().insert(atom);
    }

    /// Divides every score, the bump increment, and the resume point by the rescale threshold, and
    /// rebuilds the score map, merging buckets which collide after rounding.
    fn rescale(&mut self) {
        log::info!(target: targets::DECISION, "Rescaling activity by {}", self.rescale_threshold);
        let threshold = self.rescale_threshold;

        for score in self.score.iter_mut() {
            *score /= threshold;
        }
        self.var_inc /= threshold;
        self.resume_at /= threshold;

        let mut rebuilt: BTreeMap<ScoreKey, BTreeSet<Atom>> = BTreeMap::new();
        for (key, bucket) in std::mem::take(&mut self.buckets) {
            rebuilt.entry(ScoreKey(key.0 / threshold)).or_default().extend(bucket);
        }
        self.buckets = rebuilt;

        self.reset_pending = true;
    }

    /// Grows the bump increment, decaying all existing activity relative to future bumps.
    /// To be called once per conflict.
    pub fn decay_on_conflict(&mut self) {
        self.var_inc *= 1.0 / self.decay;
    }

    /// Raises the resume point to the activity of an atom.
    /// To be called for each atom made unassigned by a backtrack.
    pub fn lift_resume(&mut self, atom: Atom) {
        let score = self.score[atom as usize];
        if score > self.resume_at {
            self.resume_at = score;
        }
    }

    /// Requests the cursors be repositioned (at the resume point) before the next decision.
    pub fn request_reset(&mut self) {
        self.reset_pending = true;
    }

    /// Clears the resume point, so the cursors reposition at the top of the map.
    /// To be called on restart.
    pub fn clear_resume(&mut self) {
        self.resume_at = 0.0;
        self.reset_pending = true;
    }

    /// The next atom, in descending activity from the cursors, for which `is_unassigned` holds.
    ///
    /// [None] when the map is exhausted: every atom which occurs in the formula has a value.
    pub fn next_unassigned(&mut self, is_unassigned: impl Fn(Atom) -> bool) -> Option<Atom> {
        if self.reset_pending {
            self.cursor = self.reposition();
            self.reset_pending = false;
        }

        let mut cursor = self.cursor?;

        loop {
            let Some((key, bucket)) = self.buckets.range(..=ScoreKey(cursor.score)).next_back()
            else {
                self.cursor = None;
                return None;
            };
            let bucket_score = key.0;

            // The cursor bucket may have emptied since the cursor was placed, in which case the
            // in-bucket position belongs to a vanished bucket.
            if ScoreKey(bucket_score) != ScoreKey(cursor.score) {
                cursor = Cursor {
                    score: bucket_score,
                    position: None,
                };
            }

            let from = match cursor.position {
                Some(atom) => (std::ops::Bound::Excluded(atom), std::ops::Bound::Unbounded),
                None => (std::ops::Bound::Unbounded, std::ops::Bound::Unbounded),
            };

            for &atom in bucket.range(from) {
                cursor.position = Some(atom);
                if is_unassigned(atom) {
                    self.resume_at = bucket_score;
                    self.cursor = Some(cursor);
                    return Some(atom);
                }
            }

            match self.buckets.range(..ScoreKey(bucket_score)).next_back() {
                Some((next_key, _)) => {
                    cursor = Cursor {
                        score: next_key.0,
                        position: None,
                    };
                }
                None => {
                    self.cursor = None;
                    return None;
                }
            }
        }
    }

    /// Repositions the cursors at (or just below) the resume point, or at the top of the map when
    /// no resume point is set.
    fn reposition(&self) -> Option<Cursor> {
        let entry = match self.resume_at > 0.0 {
            true => self
                .buckets
                .range(..=ScoreKey(self.resume_at))
                .next_back()
                .or_else(|| self.buckets.iter().next_back()),
            false => self.buckets.iter().next_back(),
        };

        entry.map(|(key, _)| Cursor {
            score: key.0,
            position: None,
        })
    }

    /// Bumps the occurrence count of a literal.
    pub fn bump_literal(&mut self, literal: CLiteral) {
        self.literal_score[literal.index()] += 1;
    }

    /// The occurrence count of a literal.
    pub fn literal_score_of(&self, literal: CLiteral) -> usize {
        self.literal_score[literal.index()]
    }

    /// The polarity whose literal has the higher occurrence count, negative on ties.
    pub fn popular_polarity_of(&self, atom: Atom) -> bool {
        let positive = self.literal_score[CLiteral::new(atom, true).index()];
        let negative = self.literal_score[CLiteral::new(atom, false).index()];
        positive > negative
    }
}

#[cfg(test)]
mod activity_tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn bumps_order_descending() {
        let mut db = ActivityDB::new(3, &Config::default());
        db.bump(1);
        db.bump(2);
        db.bump(2);
        db.bump(3);
        db.bump(3);
        db.bump(3);

        let mut order = vec![];
        while let Some(atom) = db.next_unassigned(|_| true) {
            order.push(atom);
            if order.len() == 3 {
                break;
            }
        }
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn cursor_resumes_after_reset() {
        let mut db = ActivityDB::new(3, &Config::default());
        db.bump(1);
        db.bump(2);
        db.bump(2);
        db.bump(3);
        db.bump(3);

        // 3 and 2 share a bucket; walk past both.
        assert_eq!(db.next_unassigned(|_| true), Some(2));
        assert_eq!(db.next_unassigned(|_| true), Some(3));

        // A reset with the resume point lifted to 2's score starts over from that bucket.
        db.lift_resume(2);
        db.request_reset();
        assert_eq!(db.next_unassigned(|_| true), Some(2));
    }

    #[test]
    fn rescale_divides_and_preserves_order() {
        let mut config = Config::default();
        config.rescale_threshold.value = 10.0;
        let mut db = ActivityDB::new(2, &config);

        for _ in 0..4 {
            db.bump(1);
        }
        for _ in 0..11 {
            db.bump(2);
        }

        // 2 crossed the threshold, so every score was divided by it.
        assert!(db.score_of(2) < 10.0);
        assert!(db.score_of(1) < db.score_of(2));
        assert_eq!(db.next_unassigned(|_| true), Some(2));
    }

    #[test]
    fn literal_scores_settle_polarity() {
        use crate::structures::literal::{CLiteral, Literal};

        let mut db = ActivityDB::new(1, &Config::default());
        db.bump_literal(CLiteral::new(1, false));
        assert!(!db.popular_polarity_of(1));

        db.bump_literal(CLiteral::new(1, true));
        db.bump_literal(CLiteral::new(1, true));
        assert!(db.popular_polarity_of(1));
        assert_eq!(db.literal_score_of(CLiteral::new(1, true)), 2);
    }
}

//! Iterative collision resolution
//!
//! Each iteration scans the working set, takes the largest overlap, computes a
//! new position for both members and moves only the one that travels less.
//! The loop stops when the page is collision-free or the iteration budget runs
//! out; running out is a normal outcome, reported through [`Resolution`].
//!
//! This is a greedy local policy. Nothing guarantees a global optimum, and
//! crowded pages may not converge at all.

use tracing::{debug, info};

use super::collision::detect_collisions;
use super::config::AdjustConfig;
use super::geometry::distance;
use super::placement::find_nearest_valid_position;
use super::types::{AdjustmentResult, Annotation, BoundingBox, Point};

/// Outcome of one resolution pass
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// One entry per input annotation, in input order
    pub results: Vec<AdjustmentResult>,
    /// Number of relocation steps performed
    pub iterations: usize,
    /// Whether the final working set is collision-free
    pub converged: bool,
}

impl Resolution {
    /// Number of annotations whose position changed
    pub fn moved_count(&self) -> usize {
        self.results.iter().filter(|r| r.moved).count()
    }

    /// The adjusted annotations, in input order
    pub fn annotations(&self) -> Vec<Annotation> {
        self.results.iter().map(|r| r.annotation.clone()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    Resolving,
    Done,
}

/// Resolve overlaps and return the final placement of every annotation.
pub fn adjust_annotations_layout(
    annotations: &[Annotation],
    container: &BoundingBox,
    config: &AdjustConfig,
) -> Vec<AdjustmentResult> {
    resolve(annotations, container, config).results
}

/// Resolve overlaps, reporting iterations and convergence alongside the results.
///
/// The input slice is never modified; the pass works on a private copy.
pub fn resolve(
    annotations: &[Annotation],
    container: &BoundingBox,
    config: &AdjustConfig,
) -> Resolution {
    let mut working = annotations.to_vec();
    let mut iterations = 0;
    let mut converged = false;
    let mut state = State::Scanning;
    let mut pending = None;

    while state != State::Done {
        match state {
            State::Scanning => {
                let collisions = detect_collisions(&working);
                if !collisions.has_collision {
                    converged = true;
                    state = State::Done;
                } else if iterations >= config.max_iterations {
                    state = State::Done;
                } else {
                    pending = collisions.worst();
                    state = State::Resolving;
                }
            }
            State::Resolving => {
                if let Some(overlap) = pending.take() {
                    relocate_one(&mut working, overlap.first, overlap.second, container, config);
                    debug!(
                        iteration = iterations,
                        first = %working[overlap.first].id,
                        second = %working[overlap.second].id,
                        area = overlap.area,
                        "resolved largest overlap"
                    );
                }
                iterations += 1;
                state = State::Scanning;
            }
            State::Done => {}
        }
    }

    let results: Vec<AdjustmentResult> = annotations
        .iter()
        .zip(working)
        .map(|(original, adjusted)| AdjustmentResult {
            moved: original.is_placed() != adjusted.is_placed()
                || original.position() != adjusted.position(),
            new_position: adjusted.position(),
            annotation: adjusted,
        })
        .collect();

    let resolution = Resolution {
        results,
        iterations,
        converged,
    };
    info!(
        iterations,
        converged,
        moved = resolution.moved_count(),
        "layout adjustment finished"
    );
    resolution
}

/// Move whichever member of the pair needs the shorter trip to a valid spot.
/// Ties move the first member.
fn relocate_one(
    working: &mut [Annotation],
    first: usize,
    second: usize,
    container: &BoundingBox,
    config: &AdjustConfig,
) {
    let (candidate_first, travel_first) = proposal(working, first, container, config);
    let (candidate_second, travel_second) = proposal(working, second, container, config);

    let (index, target, travel) = if travel_first <= travel_second {
        (first, candidate_first, travel_first)
    } else {
        (second, candidate_second, travel_second)
    };

    // A member with nowhere to go keeps its record untouched
    if target == working[index].position() {
        return;
    }
    debug!(
        id = %working[index].id,
        x = target.x,
        y = target.y,
        travel,
        "relocating annotation"
    );
    working[index] = working[index].moved_to(target);
}

fn proposal(
    working: &[Annotation],
    index: usize,
    container: &BoundingBox,
    config: &AdjustConfig,
) -> (Point, f64) {
    let annotation = &working[index];
    let others: Vec<Annotation> = working
        .iter()
        .enumerate()
        .filter(|(i, other)| *i != index && other.id != annotation.id)
        .map(|(_, other)| other.clone())
        .collect();
    let target = find_nearest_valid_position(annotation, &others, container, config);
    (target, distance(annotation.position(), target))
}

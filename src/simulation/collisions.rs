//! Overlap detection and inelastic merging.
//!
//! After each integration step the body set is swept once for
//! overlapping pairs under the minimum-image metric. Overlaps merge into
//! the lower-indexed body, conserving mass and momentum; kinetic energy
//! is lost, as in any perfectly sticky collision.

use log::debug;

use crate::simulation::boundary::wrap_point;
use crate::simulation::params::World;
use crate::simulation::states::System;

/// Sweep all unordered pairs once and merge every overlap found.
///
/// Merge policy: chain-within-one-sweep. A survivor keeps scanning the
/// remaining higher-indexed bodies with its updated mass and position,
/// so a body that has absorbed one neighbour can absorb another in the
/// same tick. Removed bodies are tombstoned during the sweep and
/// compacted once at the end, which keeps indices stable while the list
/// logically shrinks.
///
/// Returns the number of merges performed.
pub fn merge_overlaps(sys: &mut System, world: &World, trail_cap: usize) -> usize {
    let n = sys.bodies.len();
    let mut alive = vec![true; n];
    let mut merges = 0;

    for i in 0..n {
        if !alive[i] {
            continue;
        }
        for j in (i + 1)..n {
            if !alive[j] {
                continue;
            }

            let d = world.min_image(sys.bodies[j].x - sys.bodies[i].x);
            // Two bodies overlap when their discs intersect. Exactly
            // coincident centers count as overlapping; the merge math
            // below never divides by the distance
            if d.norm() < sys.bodies[i].radius + sys.bodies[j].radius {
                merge_pair(sys, world, i, j, trail_cap);
                alive[j] = false;
                merges += 1;
            }
        }
    }

    if merges > 0 {
        let mut idx = 0;
        sys.bodies.retain(|_| {
            let keep = alive[idx];
            idx += 1;
            keep
        });
    }
    merges
}

/// Merge body `j` into body `i` (the survivor). Requires `i < j`.
fn merge_pair(sys: &mut System, world: &World, i: usize, j: usize, trail_cap: usize) {
    let (head, tail) = sys.bodies.split_at_mut(j);
    let bi = &mut head[i];
    let bj = &mut tail[0];

    let total_mass = bi.m + bj.m;

    // Momentum-conserving velocity: mass-weighted average
    let v = (bi.v * bi.m + bj.v * bj.m) / total_mass;

    // Mass-weighted position along the minimum-image displacement. Away
    // from the seam this equals the plain weighted average of the two
    // centers; across the seam it lands between the images instead of on
    // the far side of the world
    let d = world.min_image(bj.x - bi.x);
    let (x, _) = wrap_point(bi.x + (bj.m / total_mass) * d, world);

    bi.x = x;
    bi.v = v;
    bi.m = total_mass;
    bi.update_radius();

    // The absorbed trail rides along behind the survivor's, oldest first
    let absorbed = std::mem::take(&mut bj.trail);
    bi.trail.extend(absorbed);
    while bi.trail.len() > trail_cap {
        bi.trail.pop_front();
    }

    debug!(
        "body {} absorbed body {}, mass now {:.3}",
        bi.id, bj.id, total_mass
    );
}

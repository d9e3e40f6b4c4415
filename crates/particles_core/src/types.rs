/// Per-particle simulation state in structure-of-arrays layout.
///
/// Separate flat arrays indexed in parallel, rather than an array of
/// particle records: the force pass streams positions of all neighbors for
/// every particle, and this layout keeps that inner loop cache-friendly
/// and vectorizable.
///
/// Positions live on the unit torus and are in [0, 1) after each step's
/// wrap pass; velocities are unconstrained. Colors are assigned once at
/// initialization and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Ensemble {
    /// Color index of each particle, in [0, color_count)
    pub colors: Vec<u8>,
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub vel_x: Vec<f32>,
    pub vel_y: Vec<f32>,
}

impl Ensemble {
    pub fn len(&self) -> usize {
        self.pos_x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pos_x.is_empty()
    }
}

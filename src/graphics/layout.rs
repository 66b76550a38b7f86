/// One attribute of an interleaved vertex, measured in floats
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub location: u32,
    pub components: usize,
    pub stride: usize,
    pub offset: usize,
}

/// Interleaved `f32` vertex attributes, bound to consecutive locations
/// starting from zero
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    components: Vec<usize>,
}

impl VertexLayout {
    /// `components` holds how many floats each attribute takes, in order
    pub fn new(components: &[usize]) -> Self {
        assert!(
            components.iter().all(|&c| (1..=4).contains(&c)),
            "attributes take between one and four components"
        );
        Self {
            components: components.to_vec(),
        }
    }

    /// Floats making up a single vertex
    pub fn stride(&self) -> usize {
        self.components.iter().sum()
    }

    /// How many whole vertices `data` holds
    pub fn vertex_count(&self, data: &[f32]) -> usize {
        data.len() / self.stride()
    }

    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        let stride = self.stride();
        self.components
            .iter()
            .scan(0, |offset, &components| {
                let start = *offset;
                *offset += components;
                Some((start, components))
            })
            .enumerate()
            .map(move |(location, (offset, components))| Attribute {
                location: location as u32,
                components,
                stride,
                offset,
            })
    }
}

/// Number of animated bodies.
pub const BODY_COUNT: usize = 2;

/// The procedurally animated bodies in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Earth,
    Moon,
}

impl Body {
    /// All animated bodies, in wire order.
    pub const ALL: [Body; BODY_COUNT] = [Body::Earth, Body::Moon];

    /// Slot index in per-body buffers.
    pub fn index(self) -> usize {
        match self {
            Body::Earth => 0,
            Body::Moon => 1,
        }
    }
}

/// What a repeatable task wants after handling a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Tick me again next frame.
    Pending,
    /// Finished; stop rescheduling.
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_wire_order() {
        for (i, body) in Body::ALL.iter().enumerate() {
            assert_eq!(body.index(), i);
        }
    }
}

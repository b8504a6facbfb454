use uuid::Uuid;

/// Deterministic id source: UUID v5 over a namespace and a running sequence.
///
/// Two generators built from the same namespace produce the same ids in the
/// same order.
#[derive(Debug, Clone)]
pub struct UuidGenerator {
    namespace: Uuid,
    sequence: u64,
}

impl UuidGenerator {
    pub fn new(namespace: Uuid) -> Self {
        Self {
            namespace,
            sequence: 0,
        }
    }

    pub fn namespace(&self) -> Uuid {
        self.namespace
    }

    /// Produce the next id in the sequence
    pub fn next_id(&mut self) -> Uuid {
        let id = Uuid::new_v5(&self.namespace, &self.sequence.to_be_bytes());
        self.sequence += 1;
        id
    }
}

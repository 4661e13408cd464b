/// Raw public-goods rows that cannot be grouped into clean triplets.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReconcileError {
    #[error("stream of {rows} rows is not a multiple of 3")]
    IncompleteTriplet { rows: usize },

    #[error("phase filter left uneven positions: {first}/{second}/{third} rows")]
    RaggedPositions {
        first: usize,
        second: usize,
        third: usize,
    },

    #[error("triplet {triplet} mixes {field}: expected {expected}, found {found}")]
    MisalignedTriplet {
        triplet: usize,
        field: &'static str,
        expected: String,
        found: String,
    },
}

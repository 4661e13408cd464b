/// An online agent folding an ordered trial stream into expectations.
///
/// Rows must arrive in chronological order for one subject. Each call may
/// only read history accumulated from earlier rows plus whatever the
/// implementation documents about the current row.
pub trait ISequentialAgent {
    type Row;
    type Output;

    /// Compute expectations for `row`, then fold it into history.
    fn process_row(&mut self, row: &Self::Row) -> Self::Output;

    /// Drop all accumulated history.
    fn reset(&mut self);

    /// Number of rows folded in since construction or the last reset.
    fn rows_seen(&self) -> usize;
}

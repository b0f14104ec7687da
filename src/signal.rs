//! A minimal signal abstraction.

/// A trait for "signals" which have an input and an output type, and can be evaluated for the
/// given input.
pub trait Signal<IN, OUT> {
    /// Evaluate this signal for the given input, yielding an output.
    fn evaluate(&self, input: IN) -> OUT;

    /// Evaluate this signal for every input of an iterator, collecting the outputs in order.
    fn collect_from<I>(&self, inputs: I) -> Vec<OUT>
    where
        I: IntoIterator<Item = IN>,
    {
        inputs.into_iter().map(|input| self.evaluate(input)).collect()
    }
}

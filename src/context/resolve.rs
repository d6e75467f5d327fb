use crate::context::table::ContextTable;
use crate::foundation::error::StimResult;

/// Intensities for one side of a two-context stimulus.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedContext {
    /// Every other context's intensity, in table order.
    pub remaining: Vec<f64>,
    /// Intensity of the requested context.
    pub surround: f64,
}

impl ResolvedContext {
    /// `(remaining..., surround)`: the order rings and boards cycle through so that the
    /// first unit next to the target carries the context intensity.
    pub fn surround_last(&self) -> Vec<f64> {
        let mut out = self.remaining.clone();
        out.push(self.surround);
        out
    }

    /// `(surround, remaining...)`.
    pub fn surround_first(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.remaining.len() + 1);
        out.push(self.surround);
        out.extend_from_slice(&self.remaining);
        out
    }
}

/// Split `table` into the named context's intensity and all the others.
pub fn resolve_one(table: &ContextTable, context: &str) -> StimResult<ResolvedContext> {
    let (rest, surround) = table.without(context)?;
    Ok(ResolvedContext {
        remaining: rest.values(),
        surround,
    })
}

/// Resolve both sides of a two-context request. `table` is left untouched.
pub fn resolve(
    contexts: &[String; 2],
    table: &ContextTable,
) -> StimResult<[ResolvedContext; 2]> {
    Ok([
        resolve_one(table, &contexts[0])?,
        resolve_one(table, &contexts[1])?,
    ])
}

#[cfg(test)]
#[path = "../../tests/unit/context/resolve.rs"]
mod tests;

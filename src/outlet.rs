use crate::nested::RouteMatch;

/// Structural misuse of the outlet mechanism: a programming error in the
/// consuming application, not a routing condition.
#[derive(Debug, thiserror::Error)]
pub enum OutletError {
    #[error("outlet used outside of an active route match")]
    OutsideMatch,
}

/// A cursor over a match chain, threading nested layout composition
/// explicitly instead of through ambient context lookup.
#[derive(Debug)]
pub struct Outlet<'a, 't, T> {
    matches: &'a [RouteMatch<'t, T>],
    depth: usize,
}

impl<'a, 't, T> Outlet<'a, 't, T> {
    /// The outermost outlet of a chain. An empty chain is a misuse: there
    /// is no active route match to compose under.
    pub fn root(matches: &'a [RouteMatch<'t, T>]) -> Result<Self, OutletError> {
        if matches.is_empty() {
            return Err(OutletError::OutsideMatch);
        }
        Ok(Self { matches, depth: 0 })
    }

    /// The matches from the root down to this outlet's level.
    pub fn matches(&self) -> &'a [RouteMatch<'t, T>] {
        &self.matches[..=self.depth]
    }

    pub fn current(&self) -> &'a RouteMatch<'t, T> {
        &self.matches[self.depth]
    }

    /// The enclosing match; `None` at the root.
    pub fn parent(&self) -> Option<&'a RouteMatch<'t, T>> {
        self.depth.checked_sub(1).map(|i| &self.matches[i])
    }

    pub fn element(&self) -> Option<&'t T> {
        self.current().route.element.as_ref()
    }

    /// Steps one level inward; `None` past the innermost match.
    pub fn next(&self) -> Option<Self> {
        if self.depth + 1 < self.matches.len() {
            Some(Self {
                matches: self.matches,
                depth: self.depth + 1,
            })
        } else {
            None
        }
    }
}

impl<T> Clone for Outlet<'_, '_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Outlet<'_, '_, T> {}

/// Folds a match chain innermost-to-outermost: each level receives its own
/// match plus the already-composed child, the way nested layouts wrap their
/// outlet.
pub fn render_chain<T, R>(
    matches: &[RouteMatch<'_, T>],
    mut render: impl FnMut(&RouteMatch<'_, T>, Option<R>) -> R,
) -> Option<R> {
    matches
        .iter()
        .rev()
        .fold(None, |inner, m| Some(render(m, inner)))
}

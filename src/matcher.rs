use crate::params::ParamMap;
use crate::pattern::Segment;

use smallvec::SmallVec;

/// A successful pattern match: the bound parameters and the pattern as given.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMatch {
    pub params: ParamMap,
    pub path: String,
}

/// Matches a single pattern against a pathname.
///
/// Both sides are split on `/` with empty segments discarded, so `//a`,
/// `/a/` and `a` compare equal. Returns `None` on any miss; a miss is an
/// expected outcome, not an error.
///
/// ```
/// use reactive_router::match_path;
///
/// let m = match_path("users/:id", "/users/42").unwrap();
/// assert_eq!(m.params.get("id"), Some("42"));
/// assert!(match_path("users/:id", "/users").is_none());
/// ```
pub fn match_path(pattern: &str, pathname: &str) -> Option<PathMatch> {
    let segments: SmallVec<[Segment<'_>; 8]> =
        split_segments(pattern).map(Segment::parse).collect();
    let parts: SmallVec<[&str; 8]> = split_segments(pathname).collect();

    let mut params = ParamMap::new();
    let mut seg_idx = 0;
    let mut part_idx = 0;

    while seg_idx < segments.len() || part_idx < parts.len() {
        match segments.get(seg_idx).copied() {
            Some(Segment::CatchAll) => {
                params.insert("*", parts[part_idx..].join("/"));
                return Some(PathMatch {
                    params,
                    path: pattern.to_owned(),
                });
            }
            Some(Segment::Wildcard) => {
                if part_idx >= parts.len() {
                    return None;
                }
                seg_idx += 1;
                part_idx += 1;
            }
            Some(Segment::OptionalParam(name)) => {
                if let Some(part) = parts.get(part_idx).copied() {
                    params.insert(name, part);
                    part_idx += 1;
                }
                seg_idx += 1;
            }
            Some(Segment::Param(name)) => match parts.get(part_idx).copied() {
                Some(part) => {
                    params.insert(name, part);
                    seg_idx += 1;
                    part_idx += 1;
                }
                None => return None,
            },
            Some(Segment::Literal(lit)) => match parts.get(part_idx).copied() {
                Some(part) if part == lit => {
                    seg_idx += 1;
                    part_idx += 1;
                }
                _ => return None,
            },
            // pattern exhausted but path segments remain
            None => return None,
        }
    }

    Some(PathMatch {
        params,
        path: pattern.to_owned(),
    })
}

#[inline]
pub(crate) fn split_segments(s: &str) -> impl Iterator<Item = &str> {
    s.split('/').filter(|part| !part.is_empty())
}

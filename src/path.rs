use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use serde_json::Value;

const SEGMENT_SEPARATOR: char = '.';

/// Location of a value inside a form document, written `list.0.value`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path<'a> {
    pub segments: Vec<PathSegment<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment<'a> {
    Field(Cow<'a, str>),
    Index(usize),
}

impl<'a> Path<'a> {
    /// An empty path - pointing to the root.
    pub fn root() -> Self {
        Self { segments: vec![] }
    }

    /// Splits `path` on `.`. Segments that are plain base 10 numbers become indices.
    pub fn parse(path: &'a str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        Self {
            segments: path
                .split(SEGMENT_SEPARATOR)
                .map(PathSegment::parse)
                .collect(),
        }
    }

    /// Converts and path segment references into Owned strings so the lifetime can be static.
    pub fn into_static(&self) -> Path<'static> {
        Path {
            segments: self.segments.iter().map(PathSegment::into_static).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Follows the path from `root`. Returns `None` as soon as a segment cannot be resolved,
    /// including when a scalar is reached before the last segment.
    pub fn lookup<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        self.segments
            .iter()
            .try_fold(root, |value, segment| segment.lookup(value))
    }
}

impl<'a> PathSegment<'a> {
    fn parse(segment: &'a str) -> Self {
        // `usize::from_str` accepts a leading `+` and zeros, those stay field names.
        let canonical = segment == "0" || !segment.starts_with('0');
        if canonical && segment.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = segment.parse::<usize>() {
                return PathSegment::Index(index);
            }
        }
        PathSegment::Field(Cow::Borrowed(segment))
    }

    pub fn into_static(&self) -> PathSegment<'static> {
        match self {
            PathSegment::Field(cow) => PathSegment::Field(Cow::Owned(cow.as_ref().to_owned())),
            PathSegment::Index(i) => PathSegment::Index(*i),
        }
    }

    fn lookup<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match (self, value) {
            (PathSegment::Field(field), Value::Object(map)) => map.get(field.as_ref()),
            (PathSegment::Index(i), Value::Array(values)) => values.get(*i),
            // object keys may look like numbers
            (PathSegment::Index(i), Value::Object(map)) => map.get(&i.to_string()),
            _ => None,
        }
    }
}

impl Debug for Path<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Path<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i != 0 {
                write!(f, "{}", SEGMENT_SEPARATOR)?;
            }
            match segment {
                PathSegment::Field(field) => write!(f, "{}", field)?,
                PathSegment::Index(i) => write!(f, "{}", i)?,
            }
        }
        Ok(())
    }
}

impl FromStr for Path<'static> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s).into_static())
    }
}

impl<'a> From<Vec<PathSegment<'a>>> for Path<'a> {
    fn from(segments: Vec<PathSegment<'a>>) -> Self {
        Self { segments }
    }
}

impl<'a> From<&'a str> for PathSegment<'a> {
    fn from(value: &'a str) -> Self {
        Self::Field(Cow::Borrowed(value))
    }
}

impl From<usize> for PathSegment<'static> {
    fn from(value: usize) -> Self {
        PathSegment::Index(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse() {
        assert_eq!(
            Path::parse("list.0.value"),
            Path::from(vec!["list".into(), 0.into(), "value".into()])
        );
        assert_eq!(Path::parse(""), Path::root());
        assert_eq!(Path::parse("+1"), Path::from(vec!["+1".into()]));
        assert_eq!(Path::parse("07"), Path::from(vec!["07".into()]));
        assert_eq!(Path::parse("a..b"), Path::from(vec!["a".into(), "".into(), "b".into()]));
        assert_eq!(Path::parse("list.0.value").to_string(), "list.0.value");
        assert_eq!("a.1".parse::<Path>().unwrap(), Path::parse("a.1"));
    }

    #[test]
    fn test_lookup() {
        let info = json!({
            "list": [{ "value": "hjs" }],
            "user": { "name": "a", "10": "numeric key" },
            "count": 3
        });
        assert_eq!(Path::parse("list.0.value").lookup(&info), Some(&json!("hjs")));
        assert_eq!(Path::parse("list.0").lookup(&info), Some(&json!({ "value": "hjs" })));
        assert_eq!(Path::parse("user.10").lookup(&info), Some(&json!("numeric key")));
        assert_eq!(Path::parse("").lookup(&info), Some(&info));
        assert_eq!(Path::parse("list.1.value").lookup(&info), None);
        assert_eq!(Path::parse("list.value").lookup(&info), None);
        assert_eq!(Path::parse("missing").lookup(&info), None);
        // descending into a scalar fails
        assert_eq!(Path::parse("count.value").lookup(&info), None);
    }
}

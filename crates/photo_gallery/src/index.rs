//! Ordered photo index, newest first.

use crate::photo::{Photo, StoredPhoto};

/// Session index of captured photos, most recent first.
///
/// The only mutation is [`PhotoIndex::with_prepended`]; callers flush after each one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoIndex {
    photos: Vec<Photo>,
}

impl PhotoIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this index with `photo` at position 0.
    #[must_use]
    pub fn with_prepended(mut self, photo: Photo) -> Self {
        self.photos.insert(0, photo);
        self
    }

    /// Parses a persisted index.
    ///
    /// An absent value or anything other than a JSON array yields an empty index. Array elements
    /// that are not valid entries are dropped one by one; the rest keep their order.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::new();
        };
        let entries = match serde_json::from_str::<Vec<serde_json::Value>>(raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable photo index");
                return Self::new();
            }
        };

        let photos = entries
            .into_iter()
            .enumerate()
            .filter_map(
                |(position, entry)| match serde_json::from_value::<StoredPhoto>(entry) {
                    Ok(stored) => Some(Photo::from(stored)),
                    Err(err) => {
                        tracing::warn!(position, error = %err, "dropping unreadable photo entry");
                        None
                    }
                },
            )
            .collect();
        Self { photos }
    }

    /// Returns the persisted form of every entry, in index order.
    pub fn to_stored(&self) -> Vec<StoredPhoto> {
        self.photos.iter().map(StoredPhoto::from).collect()
    }

    /// Serializes the persisted form as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_stored())
    }

    /// Entries, newest first.
    pub fn as_slice(&self) -> &[Photo] {
        &self.photos
    }

    /// Iterates entries, newest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Photo> {
        self.photos.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Photo> {
        self.photos.iter_mut()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Returns `true` when the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

impl<'a> IntoIterator for &'a PhotoIndex {
    type Item = &'a Photo;
    type IntoIter = std::slice::Iter<'a, Photo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn prepend_keeps_newest_first() {
        let index = PhotoIndex::new()
            .with_prepended(Photo::new("1.jpeg", "a"))
            .with_prepended(Photo::new("2.jpeg", "b"))
            .with_prepended(Photo::new("3.jpeg", "c"));

        let names: Vec<_> = index.iter().map(|photo| photo.filepath.as_str()).collect();
        assert_eq!(names, vec!["3.jpeg", "2.jpeg", "1.jpeg"]);
    }

    #[test]
    fn json_never_carries_encoded_data() {
        let mut photo = Photo::new("1000.jpeg", "blob:a");
        photo.encoded_data = Some("data:image/jpeg;base64,qrs=".to_string());
        let index = PhotoIndex::new().with_prepended(photo);

        assert_eq!(
            index.to_json().expect("json"),
            r#"[{"filepath":"1000.jpeg","displayPath":"blob:a"}]"#
        );
    }

    #[test]
    fn unreadable_input_parses_empty() {
        assert!(PhotoIndex::parse(None).is_empty());
        assert!(PhotoIndex::parse(Some("not json")).is_empty());
        assert!(PhotoIndex::parse(Some(r#"{"filepath":"1.jpeg"}"#)).is_empty());
    }

    #[test]
    fn bad_elements_are_dropped_individually() {
        let index = PhotoIndex::parse(Some(
            r#"[{"filepath":"3.jpeg","displayPath":"c"},42,{"filepath":"2.jpeg"},{"displayPath":"x"},{"filepath":"1.jpeg","displayPath":"a"}]"#,
        ));
        assert_eq!(
            index.as_slice(),
            &[
                Photo::new("3.jpeg", "c"),
                Photo::new("2.jpeg", ""),
                Photo::new("1.jpeg", "a"),
            ]
        );
    }

    #[test]
    fn parse_preserves_order() {
        let index = PhotoIndex::parse(Some(
            r#"[{"filepath":"2.jpeg","displayPath":"b"},{"filepath":"1.jpeg","displayPath":"a"}]"#,
        ));
        assert_eq!(
            index.as_slice(),
            &[Photo::new("2.jpeg", "b"), Photo::new("1.jpeg", "a")]
        );
    }
}

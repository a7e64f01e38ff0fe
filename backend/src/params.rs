use crate::error::AppError;
use crate::models::NewPost;

/// Accumulates post-creation fields from query pairs and multipart text
/// fields. Later scalar values replace earlier ones; tags accumulate.
#[derive(Debug, Default)]
pub struct PostForm {
    author_id: Option<String>,
    category_id: Option<String>,
    name: Option<String>,
    description: Option<String>,
    tags: Vec<String>,
}

impl PostForm {
    pub fn push(&mut self, key: &str, value: String) {
        match key {
            "author_id" | "authorId" => self.author_id = Some(value),
            "category_id" | "categoryId" => self.category_id = Some(value),
            "name" => self.name = Some(value),
            "description" => self.description = Some(value),
            "tags" | "tags[]" => self.tags.push(value),
            _ => tracing::debug!(field = %key, "ignoring unknown post field"),
        }
    }

    pub fn extend<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in pairs {
            self.push(&key, value);
        }
    }

    pub fn finish(self) -> Result<NewPost, AppError> {
        Ok(NewPost {
            author_id: parse_id("author_id", self.author_id)?,
            category_id: parse_id("category_id", self.category_id)?,
            name: required("name", self.name)?,
            description: required("description", self.description)?,
            tags: self.tags,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::validation(format!("{field}: field required")))
}

fn parse_id(field: &str, value: Option<String>) -> Result<i64, AppError> {
    required(field, value)?
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation(format!("{field}: value is not a valid integer")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn collects_repeated_tags_and_aliases() {
        let mut form = PostForm::default();
        form.extend(pairs(&[
            ("authorId", "1"),
            ("category_id", "2"),
            ("name", "Hello"),
            ("description", "world"),
            ("tags", "python"),
            ("tags[]", "rust"),
        ]));

        let post = form.finish().unwrap();
        assert_eq!(post.author_id, 1);
        assert_eq!(post.category_id, 2);
        assert_eq!(post.tags, vec!["python", "rust"]);
    }

    #[test]
    fn later_scalars_win() {
        let mut form = PostForm::default();
        form.extend(pairs(&[
            ("author_id", "1"),
            ("category_id", "1"),
            ("name", "from query"),
            ("description", ""),
        ]));
        form.push("name", "from form".to_string());

        assert_eq!(form.finish().unwrap().name, "from form");
    }

    #[test]
    fn missing_or_bad_ids_are_validation_errors() {
        let mut form = PostForm::default();
        form.extend(pairs(&[("name", "a"), ("description", "b"), ("category_id", "1")]));
        let err = form.finish().unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.starts_with("author_id")));

        let mut form = PostForm::default();
        form.extend(pairs(&[
            ("author_id", "one"),
            ("category_id", "1"),
            ("name", "a"),
            ("description", "b"),
        ]));
        assert!(matches!(form.finish(), Err(AppError::Validation(_))));
    }
}

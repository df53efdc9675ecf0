//! The contribute form.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::models::{Contribution, DEFAULT_IMAGE_URL};
use crate::common::ContributionId;
use crate::domains::listings::{Contributor, Size};
use crate::error::{ContributionError, FieldError};

pub const MAX_PHOTOS: usize = 4;

/// Pickup location offered for every contribution.
pub const PICKUP_LOCATION: &str = "San Ramon, CA";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionForm {
    pub title: String,
    pub description: String,
    pub size: Option<Size>,
    pub color: String,
    pub style: String,
    pub kind: String,
    pub condition: String,
    photos: Vec<String>,
}

impl ContributionForm {
    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    pub fn remaining_photo_slots(&self) -> usize {
        MAX_PHOTOS - self.photos.len()
    }

    /// Add photo URLs up to the limit. Returns how many were accepted; the
    /// rest are dropped.
    pub fn add_photos<I>(&mut self, urls: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.photos.len();
        let slots = self.remaining_photo_slots();
        self.photos.extend(urls.into_iter().take(slots));
        self.photos.len() - before
    }

    /// Add a single photo, rejecting it once the form is full.
    pub fn add_photo(&mut self, url: String) -> Result<(), ContributionError> {
        if self.photos.len() >= MAX_PHOTOS {
            return Err(ContributionError::TooManyPhotos { max: MAX_PHOTOS });
        }
        self.photos.push(url);
        Ok(())
    }

    pub fn remove_photo(&mut self, index: usize) {
        if index < self.photos.len() {
            self.photos.remove(index);
        }
    }

    /// Every problem with the form, in field order.
    pub fn validate(&self) -> Result<(), ContributionError> {
        let mut errors = Vec::new();

        if self.photos.is_empty() {
            errors.push(FieldError::MissingPhoto);
        }
        if self.title.trim().is_empty() {
            errors.push(FieldError::MissingTitle);
        }
        if self.size.is_none() {
            errors.push(FieldError::MissingSelection("size"));
        }
        for (value, name) in [
            (&self.color, "color"),
            (&self.style, "style"),
            (&self.kind, "type"),
            (&self.condition, "condition"),
        ] {
            if value.is_empty() {
                errors.push(FieldError::MissingSelection(name));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ContributionError::Invalid(errors))
        }
    }

    /// Turn a valid form into a contribution.
    ///
    /// The distance is drawn from `rng` in 1..=5 miles, since there is no
    /// real geolocation.
    pub fn submit(
        &self,
        contributor: Contributor,
        rng: &mut fastrand::Rng,
        now: DateTime<Utc>,
    ) -> Result<Contribution, ContributionError> {
        self.validate()?;
        let size = self
            .size
            .ok_or(ContributionError::Invalid(vec![FieldError::MissingSelection("size")]))?;

        let images = if self.photos.is_empty() {
            vec![DEFAULT_IMAGE_URL.to_string()]
        } else {
            self.photos.clone()
        };

        let contribution = Contribution {
            id: ContributionId::new(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            size,
            color: self.color.clone(),
            style: self.style.clone(),
            kind: self.kind.clone(),
            condition: self.condition.clone(),
            location: PICKUP_LOCATION.to_string(),
            image_url: images[0].clone(),
            images,
            distance: rng.u32(1..=5),
            contributor,
            contributed_at: now,
        };

        debug!(contribution_id = %contribution.id, title = %contribution.title, "Contribution created");
        Ok(contribution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::profile::current_user;

    fn filled() -> ContributionForm {
        let mut form = ContributionForm {
            title: "Wool Scarf".into(),
            description: "Warm and soft".into(),
            size: Some(Size::M),
            color: "Gray".into(),
            style: "Casual".into(),
            kind: "Accessories".into(),
            condition: "Like New".into(),
            ..ContributionForm::default()
        };
        form.add_photos(vec!["data:image/png;base64,AAAA".to_string()]);
        form
    }

    #[test]
    fn empty_form_lists_every_missing_field() {
        match ContributionForm::default().validate() {
            Err(ContributionError::Invalid(errors)) => {
                assert_eq!(errors.len(), 7);
                assert_eq!(errors[0], FieldError::MissingPhoto);
                assert_eq!(errors[1], FieldError::MissingTitle);
                assert_eq!(errors[4].to_string(), "Please select a style");
            }
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn photos_are_capped_at_four() {
        let mut form = ContributionForm::default();
        let accepted = form.add_photos((0..6).map(|i| format!("photo-{i}")));

        assert_eq!(accepted, 4);
        assert_eq!(form.remaining_photo_slots(), 0);
        assert_eq!(
            form.add_photo("photo-7".into()),
            Err(ContributionError::TooManyPhotos { max: 4 })
        );

        form.remove_photo(0);
        assert_eq!(form.photos()[0], "photo-1");
        form.remove_photo(10);
        assert_eq!(form.photos().len(), 3);
    }

    #[test]
    fn submit_builds_contribution_from_form() {
        let now = Utc::now();
        let mut rng = fastrand::Rng::with_seed(7);

        let contribution = filled()
            .submit(current_user().as_contributor(), &mut rng, now)
            .unwrap();

        assert_eq!(contribution.title, "Wool Scarf");
        assert_eq!(contribution.location, PICKUP_LOCATION);
        assert_eq!(contribution.image_url, "data:image/png;base64,AAAA");
        assert!((1..=5).contains(&contribution.distance));
        assert_eq!(contribution.contributor.total_donations, 24);
        assert_eq!(contribution.contributed_at, now);
    }

    #[test]
    fn submit_rejects_invalid_form() {
        let mut form = filled();
        form.title = "   ".into();
        let mut rng = fastrand::Rng::with_seed(1);

        let result = form.submit(current_user().as_contributor(), &mut rng, Utc::now());
        assert_eq!(
            result,
            Err(ContributionError::Invalid(vec![FieldError::MissingTitle]))
        );
    }
}

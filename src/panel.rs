//! Form workflows: what happens when the operator saves or deletes.
//!
//! The one contract that matters here is ordering: the pre-submit batch pass
//! over the form's field pairs completes before the form is serialized and
//! sent, and the submit control stays busy for the whole span.

use crate::api::{AdminApi, Confirm};
use crate::controller::TranslationController;
use crate::error::ApiError;
use crate::fields::{ActionControl, FieldPair, FieldRegistry};
use crate::models::{PersonalInfo, Post};
use crate::notify::Notifier;
use crate::strings;
use tracing::{info, warn};

pub struct AdminPanel {
    api: AdminApi,
    controller: TranslationController,
    notifier: Notifier,
}

impl AdminPanel {
    pub fn new(api: AdminApi, controller: TranslationController, notifier: Notifier) -> Self {
        Self {
            api,
            controller,
            notifier,
        }
    }

    pub fn api(&self) -> &AdminApi {
        &self.api
    }

    pub fn controller(&self) -> &TranslationController {
        &self.controller
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    // ==================== Posts ====================

    /// Save the post editor form.
    ///
    /// Runs the sequential batch pass over `pairs`, then serializes the form
    /// and creates or updates depending on the hidden `post_id` field. The
    /// submit control is busy for the full span and restored on every exit
    /// path; failures notify and leave the form usable.
    pub async fn save_post(
        &self,
        form: &FieldRegistry,
        pairs: &[FieldPair],
        submit: &ActionControl,
    ) -> Result<(), ApiError> {
        submit.begin_busy(strings::ui().saving);

        self.controller.pre_submit(pairs).await;
        let post = collect_post(form);

        let result = match parse_id(&form.text("post_id")) {
            Some(id) => self.api.update_post(id, &post).await,
            None => self.api.create_post(&post).await.map(|_| ()),
        };

        match &result {
            Ok(()) => {
                info!("Post saved");
                self.notifier.notify(strings::ui().post_saved);
            }
            Err(e) => {
                warn!("Saving post failed: {}", e);
                self.notifier.notify(strings::ui().post_save_failed);
            }
        }

        submit.restore();
        result
    }

    /// Delete a post after explicit confirmation. Returns whether the
    /// request was issued; a declined confirmation is a no-op.
    pub async fn delete_post(&self, id: i64, confirm: &dyn Confirm) -> Result<bool, ApiError> {
        if !confirm.confirm(strings::ui().confirm_delete_post) {
            return Ok(false);
        }

        match self.api.delete_post(id).await {
            Ok(()) => Ok(true),
            Err(e) => {
                warn!("Deleting post {} failed: {}", id, e);
                self.notifier.notify(strings::ui().delete_post_failed);
                Err(e)
            }
        }
    }

    /// Fill the post editor form from an existing post.
    pub fn populate_post_form(&self, form: &FieldRegistry, post: &Post) {
        let fields = [
            ("post_id", post.id.map(|id| id.to_string()).unwrap_or_default()),
            ("post_title_fa", post.title_fa.clone()),
            ("post_title_en", post.title_en.clone()),
            ("post_excerpt_fa", post.excerpt_fa.clone()),
            ("post_excerpt_en", post.excerpt_en.clone()),
            ("post_content_fa", post.content_fa.clone()),
            ("post_content_en", post.content_en.clone()),
            ("post_category_fa", post.category_fa.clone()),
            ("post_category_en", post.category_en.clone()),
            // Backend rows may carry a full timestamp; the date input wants
            // the date part only
            (
                "post_date",
                post.date.split('T').next().unwrap_or_default().to_string(),
            ),
            ("post_published", post.published.to_string()),
        ];
        for (id, value) in fields {
            if let Some(handle) = form.resolve(id) {
                handle.set_text(&value);
            }
        }
    }

    // ==================== Personal info ====================

    /// Save the personal-info form, same shape as [`Self::save_post`] but
    /// against the singleton profile record.
    pub async fn save_profile(
        &self,
        form: &FieldRegistry,
        pairs: &[FieldPair],
        submit: &ActionControl,
    ) -> Result<(), ApiError> {
        submit.begin_busy(strings::ui().saving);

        self.controller.pre_submit(pairs).await;
        let info = collect_profile(form);
        let result = self.api.update_personal_info(&info).await;

        match &result {
            Ok(()) => {
                info!("Profile saved");
                self.notifier.notify(strings::ui().info_saved);
            }
            Err(e) => {
                warn!("Saving profile failed: {}", e);
                self.notifier.notify(strings::ui().info_save_failed);
            }
        }

        submit.restore();
        result
    }

    /// Fill the personal-info form from the loaded record.
    pub fn populate_profile_form(&self, form: &FieldRegistry, info: &PersonalInfo) {
        let fields = [
            ("name_fa", &info.name_fa),
            ("name_en", &info.name_en),
            ("title_fa", &info.title_fa),
            ("title_en", &info.title_en),
            ("about_fa", &info.about_fa),
            ("about_en", &info.about_en),
            ("email", &info.email),
            ("location", &info.location),
        ];
        for (id, value) in fields {
            if let Some(handle) = form.resolve(id) {
                handle.set_text(value);
            }
        }
    }

    // ==================== Skills ====================

    /// Delete a skill after explicit confirmation.
    pub async fn delete_skill(&self, id: i64, confirm: &dyn Confirm) -> Result<bool, ApiError> {
        if !confirm.confirm(strings::ui().confirm_delete_skill) {
            return Ok(false);
        }

        match self.api.delete_skill(id).await {
            Ok(()) => Ok(true),
            Err(e) => {
                warn!("Deleting skill {} failed: {}", id, e);
                self.notifier.notify(strings::ui().delete_skill_failed);
                Err(e)
            }
        }
    }

    /// Skill editing has no backend support yet; show the stub notice.
    pub fn edit_skill(&self, _id: i64) -> Result<(), ApiError> {
        self.notifier.notify(strings::ui().skill_edit_soon);
        Err(ApiError::NotSupported("skill editing"))
    }
}

/// Serialize the post editor form. Runs after the batch pass so every
/// auto-fillable English field is already filled.
fn collect_post(form: &FieldRegistry) -> Post {
    let date = form.text("post_date");
    Post {
        id: None,
        title_fa: form.text("post_title_fa"),
        title_en: form.text("post_title_en"),
        excerpt_fa: form.text("post_excerpt_fa"),
        excerpt_en: form.text("post_excerpt_en"),
        content_fa: form.text("post_content_fa"),
        content_en: form.text("post_content_en"),
        category_fa: form.text("post_category_fa"),
        category_en: form.text("post_category_en"),
        date: if date.trim().is_empty() {
            Post::default_date()
        } else {
            date
        },
        published: form.flag("post_published"),
        created_at: None,
    }
}

/// Serialize the personal-info form.
fn collect_profile(form: &FieldRegistry) -> PersonalInfo {
    PersonalInfo {
        name_fa: form.text("name_fa"),
        name_en: form.text("name_en"),
        title_fa: form.text("title_fa"),
        title_en: form.text("title_en"),
        about_fa: form.text("about_fa"),
        about_en: form.text("about_en"),
        email: form.text("email"),
        location: form.text("location"),
    }
}

fn parse_id(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

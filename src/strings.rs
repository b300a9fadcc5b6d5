//! Operator-facing strings for the admin panel.
//!
//! The panel UI is Persian; these are the exact notices the reference panel
//! shows. Kept in one place so the controller and workflows never embed
//! user-visible text inline.

#[derive(Debug, Clone)]
pub struct UiStrings {
    // ==================== Translation ====================
    /// Placeholder shown in the English field while a blur-triggered
    /// translation is in flight.
    pub translating_placeholder: &'static str,

    /// Idle label of the manual translate control.
    pub translate_button: &'static str,

    /// Busy label of the manual translate control while a request is pending.
    pub translate_button_busy: &'static str,

    /// Notice shown when a translation completed and was applied.
    pub translated: &'static str,

    /// Notice shown when a manual translation failed.
    pub translate_failed: &'static str,

    /// Notice shown when the manual trigger is used with an empty Persian field.
    pub empty_source: &'static str,

    // ==================== Saving ====================
    /// Busy label of a submit control while saving.
    pub saving: &'static str,

    pub post_saved: &'static str,
    pub post_save_failed: &'static str,
    pub info_saved: &'static str,
    pub info_save_failed: &'static str,

    // ==================== Deletion ====================
    pub confirm_delete_post: &'static str,
    pub confirm_delete_skill: &'static str,
    pub delete_post_failed: &'static str,
    pub delete_skill_failed: &'static str,

    // ==================== Skills ====================
    /// Shown when the operator tries to edit a skill (no backend support yet).
    pub skill_edit_soon: &'static str,
}

pub const PERSIAN_STRINGS: UiStrings = UiStrings {
    translating_placeholder: "🔄 در حال ترجمه...",
    translate_button: "🔄 ترجمه خودکار",
    translate_button_busy: "⏳ در حال ترجمه...",
    translated: "✅ ترجمه انجام شد",
    translate_failed: "❌ خطا در ترجمه",
    empty_source: "⚠️ ابتدا متن فارسی را وارد کنید",

    saving: "⏳ در حال ذخیره...",
    post_saved: "✅ پست ذخیره شد",
    post_save_failed: "خطا در ذخیره پست",
    info_saved: "✅ اطلاعات ذخیره شد",
    info_save_failed: "❌ خطا در ذخیره اطلاعات",

    confirm_delete_post: "آیا مطمئن هستید که می‌خواهید این پست را حذف کنید؟",
    confirm_delete_skill: "آیا مطمئن هستید؟",
    delete_post_failed: "خطا در حذف پست",
    delete_skill_failed: "خطا در حذف مهارت",

    skill_edit_soon: "قابلیت ویرایش مهارت به زودی اضافه می‌شود",
};

/// The panel's string set.
pub fn ui() -> &'static UiStrings {
    &PERSIAN_STRINGS
}

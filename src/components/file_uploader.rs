//! File uploader: a drop zone with a label, a hint line, and a list of
//! file rows that track upload progress.

use serde::Deserialize;

use super::mount_slot;
use crate::advisory::dev_warn;
use crate::mount::Mounted;
use crate::overrides::Override;
use crate::props::{PropValue, Props};
use crate::theme::{Theme, ThemeChoice};

/// Upload lifecycle of a single row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FileStatus {
    #[default]
    Added,
    Processing,
    Processed,
    Error,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Added => "added",
            FileStatus::Processing => "processing",
            FileStatus::Processed => "processed",
            FileStatus::Error => "error",
        }
    }
}

/// One entry in the uploader's file list.
#[derive(Clone, Debug)]
pub struct FileRow {
    id: String,
    name: String,
    status: FileStatus,
    error_message: Option<String>,
    preview_src: Option<String>,
}

impl FileRow {
    pub fn new(id: impl Into<String>, name: impl Into<String>, status: FileStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            error_message: None,
            preview_src: None,
        }
    }

    /// Message shown when the row status is [`FileStatus::Error`].
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Image source for the row thumbnail.
    pub fn preview(mut self, src: impl Into<String>) -> Self {
        self.preview_src = Some(src.into());
        self
    }
}

/// Per-slot overrides for [`FileUploader`].
///
/// Row-level slots resolve once per file row.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FileUploaderOverrides {
    pub parent_root: Override,
    pub label: Override,
    pub hint: Override,
    pub file_rows: Override,
    pub file_row: Override,
    pub file_row_column: Override,
    pub file_row_content: Override,
    pub file_row_file_name: Override,
    pub file_row_text: Override,
    pub file_row_upload_message: Override,
    pub file_row_upload_text: Override,
    pub item_preview_container: Override,
    pub image_preview_thumbnail: Override,
    pub trash_can_filled_icon_container: Override,
    pub alert_icon: Override,
    pub circle_check_filled_icon: Override,
    pub paperclip_filled_icon: Override,
    pub trash_can_filled_icon: Override,
}

impl FileUploaderOverrides {
    /// Composes these overrides on top of `base`, slot by slot.
    pub fn merged_over(self, base: Self) -> Self {
        Self {
            parent_root: self.parent_root.merged_over(base.parent_root),
            label: self.label.merged_over(base.label),
            hint: self.hint.merged_over(base.hint),
            file_rows: self.file_rows.merged_over(base.file_rows),
            file_row: self.file_row.merged_over(base.file_row),
            file_row_column: self.file_row_column.merged_over(base.file_row_column),
            file_row_content: self.file_row_content.merged_over(base.file_row_content),
            file_row_file_name: self.file_row_file_name.merged_over(base.file_row_file_name),
            file_row_text: self.file_row_text.merged_over(base.file_row_text),
            file_row_upload_message: self
                .file_row_upload_message
                .merged_over(base.file_row_upload_message),
            file_row_upload_text: self
                .file_row_upload_text
                .merged_over(base.file_row_upload_text),
            item_preview_container: self
                .item_preview_container
                .merged_over(base.item_preview_container),
            image_preview_thumbnail: self
                .image_preview_thumbnail
                .merged_over(base.image_preview_thumbnail),
            trash_can_filled_icon_container: self
                .trash_can_filled_icon_container
                .merged_over(base.trash_can_filled_icon_container),
            alert_icon: self.alert_icon.merged_over(base.alert_icon),
            circle_check_filled_icon: self
                .circle_check_filled_icon
                .merged_over(base.circle_check_filled_icon),
            paperclip_filled_icon: self
                .paperclip_filled_icon
                .merged_over(base.paperclip_filled_icon),
            trash_can_filled_icon: self
                .trash_can_filled_icon
                .merged_over(base.trash_can_filled_icon),
        }
    }
}

/// File uploader configuration.
///
/// # Example
///
/// ```rust
/// use standin::{FileRow, FileStatus, FileUploader, Theme};
///
/// let tree = FileUploader::new()
///     .label("Receipts")
///     .hint("PDF or PNG, up to 10 MB")
///     .row(FileRow::new("r1", "march.pdf", FileStatus::Processed))
///     .mount(&Theme::default_light());
///
/// assert_eq!(tree.find("Label").unwrap().text_content(), "Receipts");
/// assert_eq!(tree.find_all("FileRow").len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FileUploader {
    label: Option<String>,
    hint: Option<String>,
    accept: Option<String>,
    multiple: bool,
    disabled: bool,
    disable_click: bool,
    min_size: Option<u64>,
    max_size: Option<u64>,
    error_message: Option<String>,
    item_preview: bool,
    rows: Vec<FileRow>,
    overrides: FileUploaderOverrides,
}

impl FileUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Comma-separated list of accepted MIME types or extensions.
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Keeps the drop zone active while ignoring click-to-browse.
    pub fn disable_click(mut self, disable_click: bool) -> Self {
        self.disable_click = disable_click;
        self
    }

    pub fn min_size(mut self, bytes: u64) -> Self {
        self.min_size = Some(bytes);
        self
    }

    pub fn max_size(mut self, bytes: u64) -> Self {
        self.max_size = Some(bytes);
        self
    }

    /// Uploader-level error shown in place of the hint.
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Shows a thumbnail column in every file row.
    pub fn item_preview(mut self, item_preview: bool) -> Self {
        self.item_preview = item_preview;
        self
    }

    pub fn row(mut self, row: FileRow) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = FileRow>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn overrides(mut self, overrides: FileUploaderOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolves every slot and assembles the mounted tree.
    pub fn mount<'a>(&self, theme: impl Into<ThemeChoice<'a>>) -> Mounted {
        let theme = theme.into().resolve();

        if let (Some(min), Some(max)) = (self.min_size, self.max_size) {
            if min > max {
                dev_warn!("file uploader min size {min} exceeds max size {max}");
            }
        }

        let mut root_props = Props::new()
            .add("$disabled", self.disabled)
            .add("$disableClick", self.disable_click)
            .add("$multiple", self.multiple);
        if let Some(accept) = &self.accept {
            root_props.insert("accept", accept.as_str());
        }
        if let Some(min) = self.min_size {
            root_props.insert("minSize", min);
        }
        if let Some(max) = self.max_size {
            root_props.insert("maxSize", max);
        }

        let mut root = mount_slot("ParentRoot", &self.overrides.parent_root, root_props, &theme);

        if let Some(label) = &self.label {
            root = root
                .child(mount_slot("Label", &self.overrides.label, Props::new(), &theme).text(label));
        }

        let hint_text = self.error_message.as_deref().or(self.hint.as_deref());
        if let Some(text) = hint_text {
            let hint = mount_slot(
                "Hint",
                &self.overrides.hint,
                Props::new().add("$error", self.error_message.is_some()),
                &theme,
            );
            root = root.child(hint.text(text));
        }

        if !self.rows.is_empty() {
            let mut list = mount_slot(
                "FileRows",
                &self.overrides.file_rows,
                Props::new().add("role", "list"),
                &theme,
            );
            for row in &self.rows {
                list = list.child(self.file_row(row, &theme));
            }
            root = root.child(list);
        }

        root
    }

    fn file_row(&self, row: &FileRow, theme: &Theme) -> Mounted {
        let name_slot = mount_slot(
            "FileRowFileName",
            &self.overrides.file_row_file_name,
            Props::new(),
            theme,
        )
        .text(&row.name);

        let mut text = mount_slot(
            "FileRowText",
            &self.overrides.file_row_text,
            Props::new(),
            theme,
        )
        .child(name_slot);
        if let Some(message) = self.upload_message(row, theme) {
            text = text.child(message);
        }

        let content = mount_slot(
            "FileRowContent",
            &self.overrides.file_row_content,
            Props::new(),
            theme,
        )
        .child(text);

        let mut column = mount_slot(
            "FileRowColumn",
            &self.overrides.file_row_column,
            Props::new(),
            theme,
        );
        if self.item_preview {
            column = column.child(self.item_preview_slot(row, theme));
        }
        column = column.child(content);

        let trash_container = mount_slot(
            "TrashCanFilledIconContainer",
            &self.overrides.trash_can_filled_icon_container,
            Props::new()
                .add("aria-label", "Remove file")
                .add("onClick", PropValue::handler("removeFile")),
            theme,
        )
        .child(mount_slot(
            "TrashCanFilledIcon",
            &self.overrides.trash_can_filled_icon,
            Props::new(),
            theme,
        ));

        mount_slot(
            "FileRow",
            &self.overrides.file_row,
            Props::new()
                .add("role", "listitem")
                .add("$id", row.id.as_str())
                .add("$status", row.status.as_str()),
            theme,
        )
        .child(column)
        .child(trash_container)
    }

    fn item_preview_slot(&self, row: &FileRow, theme: &Theme) -> Mounted {
        let container = mount_slot(
            "ItemPreviewContainer",
            &self.overrides.item_preview_container,
            Props::new(),
            theme,
        );
        match &row.preview_src {
            Some(src) => container.child(mount_slot(
                "ImagePreviewThumbnail",
                &self.overrides.image_preview_thumbnail,
                Props::new().add("src", src.as_str()).add("alt", row.name.as_str()),
                theme,
            )),
            None => container.child(mount_slot(
                "PaperclipFilledIcon",
                &self.overrides.paperclip_filled_icon,
                Props::new(),
                theme,
            )),
        }
    }

    fn upload_message(&self, row: &FileRow, theme: &Theme) -> Option<Mounted> {
        let (icon, text) = match row.status {
            FileStatus::Added => return None,
            FileStatus::Processing => (None, "Uploading...".to_owned()),
            FileStatus::Processed => (
                Some(mount_slot(
                    "CircleCheckFilledIcon",
                    &self.overrides.circle_check_filled_icon,
                    Props::new(),
                    theme,
                )),
                "Upload successful".to_owned(),
            ),
            FileStatus::Error => (
                Some(mount_slot(
                    "AlertIcon",
                    &self.overrides.alert_icon,
                    Props::new(),
                    theme,
                )),
                row.error_message
                    .clone()
                    .unwrap_or_else(|| "Upload failed".to_owned()),
            ),
        };

        let mut message = mount_slot(
            "FileRowUploadMessage",
            &self.overrides.file_row_upload_message,
            Props::new(),
            theme,
        );
        if let Some(icon) = icon {
            message = message.child(icon);
        }
        let upload_text = mount_slot(
            "FileRowUploadText",
            &self.overrides.file_row_upload_text,
            Props::new(),
            theme,
        )
        .text(text);
        Some(message.child(upload_text))
    }
}

//! Static application registry, the prop bundle handed to app views, and the
//! placeholder app contents themselves.
//!
//! The window manager treats apps as opaque renderable units: it reads the
//! descriptor table for titles and default sizes and mounts whatever view the
//! app provides. Everything inside an app view is intentionally shallow.

use std::collections::BTreeMap;

use leptos::*;

use crate::model::{AppId, Size, WindowRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One entry of the static app registry.
pub struct AppDescriptor {
    pub app_id: AppId,
    /// Window title and launcher label.
    pub name: &'static str,
    /// Stable icon identifier used for CSS hooks.
    pub icon_id: &'static str,
    /// Glyph rendered inside taskbar/start-menu/desktop icons.
    pub glyph: &'static str,
    pub default_size: Size,
    /// Accent class applied to the start-menu tile.
    pub accent: &'static str,
    /// Label on the desktop icon column, when the app is pinned there.
    pub desktop_icon_label: Option<&'static str>,
}

const APP_REGISTRY: [AppDescriptor; 8] = [
    AppDescriptor {
        app_id: AppId::Copilot,
        name: "Copilot",
        icon_id: "copilot",
        glyph: "\u{1F916}",
        default_size: Size {
            width: 400,
            height: 600,
        },
        accent: "accent-copilot",
        desktop_icon_label: Some("Copilot"),
    },
    AppDescriptor {
        app_id: AppId::Explorer,
        name: "File Explorer",
        icon_id: "explorer",
        glyph: "\u{1F4C1}",
        default_size: Size {
            width: 800,
            height: 500,
        },
        accent: "accent-explorer",
        desktop_icon_label: Some("This PC"),
    },
    AppDescriptor {
        app_id: AppId::Browser,
        name: "Edge Browser",
        icon_id: "browser",
        glyph: "\u{1F310}",
        default_size: Size {
            width: 900,
            height: 600,
        },
        accent: "accent-browser",
        desktop_icon_label: Some("Edge"),
    },
    AppDescriptor {
        app_id: AppId::Settings,
        name: "Settings",
        icon_id: "settings",
        glyph: "\u{2699}",
        default_size: Size {
            width: 800,
            height: 550,
        },
        accent: "accent-settings",
        desktop_icon_label: Some("Settings"),
    },
    AppDescriptor {
        app_id: AppId::Notepad,
        name: "Notepad",
        icon_id: "notepad",
        glyph: "\u{1F4DD}",
        default_size: Size {
            width: 600,
            height: 400,
        },
        accent: "accent-notepad",
        desktop_icon_label: Some("Notepad"),
    },
    AppDescriptor {
        app_id: AppId::Calculator,
        name: "Calculator",
        icon_id: "calculator",
        glyph: "\u{1F5A9}",
        default_size: Size {
            width: 320,
            height: 480,
        },
        accent: "accent-calculator",
        desktop_icon_label: None,
    },
    AppDescriptor {
        app_id: AppId::Photos,
        name: "Photos",
        icon_id: "photos",
        glyph: "\u{1F5BC}",
        default_size: Size {
            width: 700,
            height: 500,
        },
        accent: "accent-photos",
        desktop_icon_label: None,
    },
    AppDescriptor {
        app_id: AppId::Upload,
        name: "Upload",
        icon_id: "upload",
        glyph: "\u{2601}",
        default_size: Size {
            width: 500,
            height: 400,
        },
        accent: "accent-upload",
        desktop_icon_label: Some("Upload"),
    },
];

/// Returns the full app registry in launcher order.
pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Looks up an app descriptor. `None` signals a configuration bug and callers
/// treat it as a silent no-op.
pub fn descriptor(app_id: AppId) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|entry| entry.app_id == app_id)
}

/// Apps pinned to the desktop icon column, in display order.
pub fn desktop_icon_apps() -> Vec<&'static AppDescriptor> {
    // Original layout order, not registry order.
    [
        AppId::Explorer,
        AppId::Browser,
        AppId::Copilot,
        AppId::Notepad,
        AppId::Settings,
        AppId::Upload,
    ]
    .iter()
    .filter_map(|app_id| descriptor(*app_id))
    .filter(|entry| entry.desktop_icon_label.is_some())
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Kind of a virtual file-system entry.
pub enum FileKind {
    File,
    Folder,
    Drive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry in the mock virtual file system. Opaque to the window manager;
/// only Explorer/Photos/Upload look inside.
pub struct VirtualFile {
    pub id: String,
    pub name: String,
    pub kind: FileKind,
    pub icon_id: &'static str,
    pub size: Option<String>,
    pub url: Option<String>,
}

/// Folder name → entries. Consumed as an opaque shared store.
pub type FileSystem = BTreeMap<String, Vec<VirtualFile>>;

/// Folder uploads land in when no target is given.
pub const UPLOAD_TARGET_FOLDER: &str = "Downloads";

#[derive(Debug, Clone, PartialEq, Eq)]
/// A file handed to the upload callback by an app.
pub struct UploadedFile {
    pub name: String,
    pub size_bytes: u64,
    pub is_image: bool,
    /// Object URL for image previews, when the host created one.
    pub url: Option<String>,
}

fn dir(id: &str, name: &str) -> VirtualFile {
    VirtualFile {
        id: id.to_string(),
        name: name.to_string(),
        kind: FileKind::Folder,
        icon_id: "folder",
        size: None,
        url: None,
    }
}

fn doc(id: &str, name: &str, size: &str) -> VirtualFile {
    VirtualFile {
        id: id.to_string(),
        name: name.to_string(),
        kind: FileKind::File,
        icon_id: "document",
        size: Some(size.to_string()),
        url: None,
    }
}

/// Seeds the mock file system with the stock folders and sample files.
pub fn initial_file_system() -> FileSystem {
    let mut fs = FileSystem::new();
    fs.insert(
        "This PC".to_string(),
        vec![
            dir("1", "Documents"),
            dir("2", "Pictures"),
            dir("3", "Downloads"),
            dir("4", "Music"),
            dir("5", "Videos"),
            VirtualFile {
                id: "6".to_string(),
                name: "Local Disk (C:)".to_string(),
                kind: FileKind::Drive,
                icon_id: "drive",
                size: None,
                url: None,
            },
        ],
    );
    fs.insert(
        "Documents".to_string(),
        vec![
            doc("d1", "Project_Alpha_Specs.docx", "24 KB"),
            doc("d2", "Budget_Q3.xlsx", "12 KB"),
            doc("d3", "Notes.txt", "1 KB"),
        ],
    );
    fs.insert(
        "Pictures".to_string(),
        vec![
            VirtualFile {
                id: "p1".to_string(),
                name: "Vacation_2023.jpg".to_string(),
                kind: FileKind::File,
                icon_id: "image",
                size: Some("2.4 MB".to_string()),
                url: Some("https://images.unsplash.com/photo-1506744038136-46273834b3fb?q=80&w=2070&auto=format&fit=crop".to_string()),
            },
            VirtualFile {
                id: "p2".to_string(),
                name: "Design_Mockup.png".to_string(),
                kind: FileKind::File,
                icon_id: "image",
                size: Some("1.1 MB".to_string()),
                url: Some("https://images.unsplash.com/photo-1550684848-fac1c5b4e853?q=80&w=2070&auto=format&fit=crop".to_string()),
            },
        ],
    );
    fs.insert(
        "Downloads".to_string(),
        vec![doc("dl1", "installer.exe", "45 MB")],
    );
    fs.insert("Music".to_string(), Vec::new());
    fs.insert("Videos".to_string(), Vec::new());
    fs.insert(
        "Local Disk (C:)".to_string(),
        vec![
            dir("c1", "Windows"),
            dir("c2", "Program Files"),
            dir("c3", "Users"),
        ],
    );
    fs
}

/// Appends uploaded files to `target` (created if missing), deriving display
/// sizes in KB. Ids stay unique by counting every entry already stored.
pub fn append_uploaded_files(fs: &mut FileSystem, files: Vec<UploadedFile>, target: &str) {
    let mut serial: usize = fs.values().map(Vec::len).sum();
    let entries = fs.entry(target.to_string()).or_default();
    for file in files {
        serial += 1;
        let kb = file.size_bytes as f64 / 1024.0;
        entries.push(VirtualFile {
            id: format!("f-{serial}"),
            name: file.name,
            kind: FileKind::File,
            icon_id: if file.is_image { "image" } else { "document" },
            size: Some(format!("{kb:.1} KB")),
            url: file.url,
        });
    }
}

#[derive(Clone, Copy)]
/// Fixed prop bundle handed to every app view. The window manager is agnostic
/// to what the app does with it.
pub struct AppViewContext {
    /// Current account display name.
    pub username: Signal<String>,
    /// Current wallpaper image URL.
    pub wallpaper_url: Signal<String>,
    /// Replaces the wallpaper.
    pub set_wallpaper: Callback<String>,
    /// Shared virtual file system.
    pub file_system: RwSignal<FileSystem>,
    /// Adds uploaded files to the Downloads folder.
    pub upload_files: Callback<Vec<UploadedFile>>,
}

/// Mounts the app view hosted by `window`.
pub fn render_window_contents(window: &WindowRecord, ctx: AppViewContext) -> View {
    match window.app_id {
        AppId::Copilot => view! { <CopilotApp ctx=ctx /> }.into_view(),
        AppId::Explorer => view! { <ExplorerApp ctx=ctx /> }.into_view(),
        AppId::Browser => view! { <BrowserApp /> }.into_view(),
        AppId::Settings => view! { <SettingsApp ctx=ctx /> }.into_view(),
        AppId::Notepad => view! { <NotepadApp /> }.into_view(),
        AppId::Calculator => view! { <CalculatorApp /> }.into_view(),
        AppId::Photos => view! { <PhotosApp ctx=ctx /> }.into_view(),
        AppId::Upload => view! { <UploadApp ctx=ctx /> }.into_view(),
    }
}

#[component]
fn CopilotApp(ctx: AppViewContext) -> impl IntoView {
    view! {
        <div class="app app-copilot">
            <p class="app-heading">"Copilot"</p>
            <p>{move || format!("Hi {}, ask me anything.", ctx.username.get())}</p>
            <p class="app-muted">"Chat responses are not wired up in this concept build."</p>
        </div>
    }
}

#[component]
fn ExplorerApp(ctx: AppViewContext) -> impl IntoView {
    let current_folder = create_rw_signal("This PC".to_string());
    let entries = Signal::derive(move || {
        ctx.file_system
            .get()
            .get(&current_folder.get())
            .cloned()
            .unwrap_or_default()
    });

    view! {
        <div class="app app-explorer">
            <div class="app-toolbar">
                <button on:click=move |_| current_folder.set("This PC".to_string())>
                    "This PC"
                </button>
                <span class="app-muted">{move || current_folder.get()}</span>
            </div>
            <ul class="explorer-entries">
                <For each=move || entries.get() key=|entry| entry.id.clone() let:entry>
                    {{
                        let is_container = matches!(entry.kind, FileKind::Folder | FileKind::Drive);
                        let name = entry.name.clone();
                        let nav_target = entry.name.clone();
                        view! {
                            <li>
                                <button
                                    class="explorer-entry"
                                    on:dblclick=move |_| {
                                        if is_container {
                                            current_folder.set(nav_target.clone());
                                        }
                                    }
                                >
                                    <span class=format!("file-glyph glyph-{}", entry.icon_id)></span>
                                    <span>{name}</span>
                                    <span class="app-muted">{entry.size.clone().unwrap_or_default()}</span>
                                </button>
                            </li>
                        }
                    }}
                </For>
            </ul>
        </div>
    }
}

#[component]
fn BrowserApp() -> impl IntoView {
    view! {
        <div class="app app-browser">
            <div class="app-toolbar">
                <input type="text" readonly value="https://www.example.com" />
            </div>
            <p class="app-muted">"Embedded browsing is stubbed out in this concept build."</p>
        </div>
    }
}

const WALLPAPER_PRESETS: [(&str, &str); 3] = [
    (
        "Bloom",
        "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=2564&auto=format&fit=crop",
    ),
    (
        "Valley",
        "https://images.unsplash.com/photo-1506744038136-46273834b3fb?q=80&w=2070&auto=format&fit=crop",
    ),
    (
        "Abstract",
        "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?q=80&w=2070&auto=format&fit=crop",
    ),
];

#[component]
fn SettingsApp(ctx: AppViewContext) -> impl IntoView {
    view! {
        <div class="app app-settings">
            <p class="app-heading">{move || format!("Account: {}", ctx.username.get())}</p>
            <p>"Personalization"</p>
            <div class="wallpaper-presets">
                {WALLPAPER_PRESETS
                    .iter()
                    .map(|(label, url)| {
                        let preset_url = url.to_string();
                        let apply_url = preset_url.clone();
                        let selected =
                            Signal::derive(move || ctx.wallpaper_url.get() == preset_url);
                        view! {
                            <button
                                class="wallpaper-preset"
                                class:selected=selected
                                on:click=move |_| ctx.set_wallpaper.call(apply_url.clone())
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn NotepadApp() -> impl IntoView {
    let text = create_rw_signal(String::new());
    view! {
        <div class="app app-notepad">
            <textarea
                placeholder="Type here..."
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
fn CalculatorApp() -> impl IntoView {
    view! {
        <div class="app app-calculator">
            <div class="calc-display">"0"</div>
            <p class="app-muted">"Calculator keys are cosmetic in this concept build."</p>
        </div>
    }
}

#[component]
fn PhotosApp(ctx: AppViewContext) -> impl IntoView {
    let pictures = Signal::derive(move || {
        ctx.file_system
            .get()
            .get("Pictures")
            .cloned()
            .unwrap_or_default()
    });

    view! {
        <div class="app app-photos">
            <div class="photo-grid">
                <For each=move || pictures.get() key=|entry| entry.id.clone() let:entry>
                    {match entry.url.clone() {
                        Some(url) => view! { <img src=url alt=entry.name.clone() /> }.into_view(),
                        None => view! { <span class="app-muted">{entry.name.clone()}</span> }
                            .into_view(),
                    }}
                </For>
            </div>
        </div>
    }
}

#[component]
fn UploadApp(ctx: AppViewContext) -> impl IntoView {
    let uploaded_count = create_rw_signal(0usize);
    let add_sample = move |_| {
        let n = uploaded_count.get_untracked() + 1;
        uploaded_count.set(n);
        ctx.upload_files.call(vec![UploadedFile {
            name: format!("upload_{n}.txt"),
            size_bytes: 2048,
            is_image: false,
            url: None,
        }]);
    };

    view! {
        <div class="app app-upload">
            <p class="app-heading">"Upload"</p>
            <p class="app-muted">"Files land in Downloads."</p>
            <button on:click=add_sample>"Add sample file"</button>
            <p>{move || format!("Uploaded this session: {}", uploaded_count.get())}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_covers_every_app_id() {
        for app_id in [
            AppId::Copilot,
            AppId::Explorer,
            AppId::Browser,
            AppId::Settings,
            AppId::Notepad,
            AppId::Calculator,
            AppId::Photos,
            AppId::Upload,
        ] {
            assert!(descriptor(app_id).is_some(), "missing {app_id:?}");
        }
    }

    #[test]
    fn desktop_icon_column_order_matches_layout() {
        let labels: Vec<_> = desktop_icon_apps()
            .iter()
            .filter_map(|entry| entry.desktop_icon_label)
            .collect();
        assert_eq!(
            labels,
            vec!["This PC", "Edge", "Copilot", "Notepad", "Settings", "Upload"]
        );
    }

    #[test]
    fn uploads_append_to_downloads_with_kb_sizes() {
        let mut fs = initial_file_system();
        let before = fs.get(UPLOAD_TARGET_FOLDER).unwrap().len();

        append_uploaded_files(
            &mut fs,
            vec![UploadedFile {
                name: "photo.png".to_string(),
                size_bytes: 3 * 1024,
                is_image: true,
                url: None,
            }],
            UPLOAD_TARGET_FOLDER,
        );

        let downloads = fs.get(UPLOAD_TARGET_FOLDER).unwrap();
        assert_eq!(downloads.len(), before + 1);
        let added = downloads.last().unwrap();
        assert_eq!(added.size.as_deref(), Some("3.0 KB"));
        assert_eq!(added.icon_id, "image");
    }

    #[test]
    fn uploads_create_missing_target_folder() {
        let mut fs = FileSystem::new();
        append_uploaded_files(
            &mut fs,
            vec![UploadedFile {
                name: "a.txt".to_string(),
                size_bytes: 512,
                is_image: false,
                url: None,
            }],
            "Inbox",
        );
        assert_eq!(fs.get("Inbox").unwrap().len(), 1);
    }
}

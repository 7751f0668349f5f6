//! Toast notifications

use leptos::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastVariant {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct ToastMessage {
    pub id: u32,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

/// Toast queue provided to the whole app
#[derive(Clone, Copy)]
pub struct Toasts {
    messages: RwSignal<Vec<ToastMessage>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        Toasts {
            messages: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn success(&self, title: impl Into<String>, description: Option<String>) {
        self.push(title.into(), description, ToastVariant::Success, 3000);
    }

    pub fn error(&self, title: impl Into<String>, description: Option<String>) {
        self.push(title.into(), description, ToastVariant::Error, 5000);
    }

    pub fn info(&self, title: impl Into<String>, description: Option<String>, duration_ms: u32) {
        self.push(title.into(), description, ToastVariant::Info, duration_ms);
    }

    fn push(&self, title: String, description: Option<String>, variant: ToastVariant, duration_ms: u32) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.messages.update(|m| {
            m.push(ToastMessage {
                id,
                title,
                description,
                variant,
            })
        });

        let messages = self.messages;
        gloo::timers::callback::Timeout::new(duration_ms, move || {
            // the queue may be gone by the time this fires
            let _ = messages.try_update(|m| m.retain(|t| t.id != id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u32) {
        self.messages.update(|m| m.retain(|t| t.id != id));
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts not found")
}

/// Toast container
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.messages.get()
                key=|t| t.id
                children=move |t| {
                    let (icon, class) = match t.variant {
                        ToastVariant::Success => ("✓", "toast success"),
                        ToastVariant::Error => ("✕", "toast error"),
                        ToastVariant::Info => ("ℹ", "toast info"),
                    };
                    let id = t.id;
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            <span class="toast-icon">{icon}</span>
                            <div class="toast-body">
                                <strong>{t.title}</strong>
                                {t.description.map(|d| view! { <p>{d}</p> })}
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

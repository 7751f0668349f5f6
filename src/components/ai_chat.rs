//! Simulated assistant chat

use gloo::timers::future::TimeoutFuture;
use leptos::*;

use crate::components::hero::typed_prefix;
use crate::i18n::use_i18n;
use crate::utils::log_trace::log_info;

const THINKING_MS: u32 = 1000;
const CHAR_MS: u32 = 30;

const GREETING: &str = "👋 Hello! I'm an AI assistant showcasing advanced conversational capabilities. Ask me anything about data science, machine learning, or AI!";

pub const CANNED_RESPONSES: &[&str] = &[
    "I'm an AI assistant specialized in data science and machine learning. I can help you understand complex algorithms, analyze data patterns, and provide insights on AI implementations.",
    "That's a great question about neural networks! Deep learning models use multiple layers to learn hierarchical representations of data, making them incredibly powerful for tasks like image recognition and natural language processing.",
    "Machine learning is transforming industries by enabling computers to learn from data without explicit programming. From recommendation systems to autonomous vehicles, ML is everywhere!",
    "Data preprocessing is crucial for ML success. It involves cleaning, transforming, and preparing raw data for analysis. Good data quality leads to better model performance.",
    "Computer vision combines AI with image processing to enable machines to 'see' and interpret visual information. It's used in medical imaging, autonomous driving, and facial recognition.",
    "Natural Language Processing (NLP) helps computers understand and generate human language. Modern transformers like GPT have revolutionized how we interact with AI systems.",
];

const QUICK_QUESTIONS: &[&str] = &[
    "What is machine learning?",
    "How do neural networks work?",
    "Explain computer vision",
    "What is data preprocessing?",
    "Tell me about NLP",
    "AI in healthcare applications",
];

/// Response for a random `seed` in [0, 1)
pub fn pick_response(seed: f64) -> &'static str {
    let index = (seed * CANNED_RESPONSES.len() as f64).floor() as usize;
    CANNED_RESPONSES[index.min(CANNED_RESPONSES.len() - 1)]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u32,
    pub role: Role,
    pub content: String,
    pub typing: bool,
}

/// Message list plus the "assistant is busy" flag
#[derive(Debug, Clone)]
pub struct Conversation {
    pub messages: Vec<ChatMessage>,
    busy: bool,
    next_id: u32,
}

impl Default for Conversation {
    fn default() -> Self {
        let mut conversation = Conversation {
            messages: Vec::new(),
            busy: false,
            next_id: 0,
        };
        conversation.push(Role::Assistant, GREETING.to_string(), false);
        conversation
    }
}

impl Conversation {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    fn push(&mut self, role: Role, content: String, typing: bool) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            role,
            content,
            typing,
        });
    }

    /// Appends the user's message and a typing indicator. Blank input or a
    /// reply in progress is ignored.
    pub fn submit(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || self.busy {
            return false;
        }
        self.push(Role::User, text.to_string(), false);
        self.push(Role::Assistant, String::new(), true);
        self.busy = true;
        true
    }

    /// Replaces the typing indicator with an empty reply bubble.
    pub fn begin_reply(&mut self) {
        self.messages.retain(|m| !m.typing);
        self.push(Role::Assistant, String::new(), false);
    }

    /// Shows the first `count` characters of `response`. Returns true once
    /// the whole text is visible.
    pub fn reveal(&mut self, response: &str, count: usize) -> bool {
        if let Some(last) = self.messages.last_mut() {
            if last.role == Role::Assistant && !last.typing {
                last.content = typed_prefix(response, count);
            }
        }
        let done = count >= response.chars().count();
        if done {
            self.busy = false;
        }
        done
    }
}

#[component]
pub fn AIChatDemo() -> impl IntoView {
    let i18n = use_i18n();
    let conversation = create_rw_signal(Conversation::default());
    let (input, set_input) = create_signal(String::new());
    let (expanded, set_expanded) = create_signal(false);
    let scroller = create_node_ref::<html::Div>();

    create_effect(move |_| {
        conversation.track();
        if let Some(el) = scroller.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let send = move |text: String| {
        let accepted = conversation
            .try_update(|c| c.submit(&text))
            .unwrap_or(false);
        if !accepted {
            return;
        }
        set_input.set(String::new());
        log_info("chat", &format!("Question: {}", text.trim()));

        let response = pick_response(js_sys::Math::random());
        spawn_local(async move {
            TimeoutFuture::new(THINKING_MS).await;
            if conversation.try_update(|c| c.begin_reply()).is_none() {
                return;
            }
            let mut shown = 0;
            loop {
                TimeoutFuture::new(CHAR_MS).await;
                shown += 1;
                match conversation.try_update(|c| c.reveal(response, shown)) {
                    Some(false) => continue,
                    _ => break,
                }
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send(input.get_untracked());
        }
    };

    view! {
        <div class="section ai-chat">
            <div class="section-header">
                <h2>{move || i18n.t("ai_demo.title")}</h2>
                <p>{move || i18n.t("ai_demo.description")}</p>
            </div>

            <div class="card chat-card">
                <div class="chat-header">
                    <span class="chat-avatar">"🧠"</span>
                    <span class="chat-name">"AI Data Science Assistant"</span>
                    <span class="badge online">{move || i18n.t("ai_demo.online")}</span>
                    <button class="btn small outline" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                        {move || if expanded.get() { i18n.t("ai_demo.collapse") } else { i18n.t("ai_demo.expand") }}
                    </button>
                </div>

                <div node_ref=scroller class=move || if expanded.get() { "chat-messages expanded" } else { "chat-messages" }>
                    <For
                        each=move || conversation.with(|c| c.messages.clone())
                        key=|m| (m.id, m.content.len(), m.typing)
                        children=move |message| {
                            let is_user = message.role == Role::User;
                            view! {
                                <div class=if is_user { "chat-row user" } else { "chat-row assistant" }>
                                    <span class="chat-avatar small">{if is_user { "👤" } else { "🤖" }}</span>
                                    <div class="chat-bubble">
                                        {if message.typing {
                                            view! {
                                                <span class="typing-dots"><span></span><span></span><span></span></span>
                                                <span class="muted">"AI is thinking..."</span>
                                            }.into_view()
                                        } else {
                                            message.content.clone().into_view()
                                        }}
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="quick-questions">
                    <span class="muted">{move || i18n.t("ai_demo.quick_questions")}</span>
                    {QUICK_QUESTIONS.iter().map(|q| {
                        let q = *q;
                        view! {
                            <button
                                class="btn small outline"
                                disabled=move || conversation.with(|c| c.is_busy())
                                on:click=move |_| send(q.to_string())
                            >
                                {q}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="chat-input">
                    <input
                        type="text"
                        placeholder=move || i18n.t("ai_demo.placeholder")
                        prop:value=input
                        disabled=move || conversation.with(|c| c.is_busy())
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button
                        class="btn primary"
                        disabled=move || conversation.with(|c| c.is_busy()) || input.with(|i| i.trim().is_empty())
                        on:click=move |_| send(input.get_untracked())
                    >
                        {move || i18n.t("ai_demo.send")}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let c = Conversation::default();
        assert_eq!(c.messages.len(), 1);
        assert_eq!(c.messages[0].role, Role::Assistant);
        assert!(!c.is_busy());
    }

    #[test]
    fn test_blank_or_busy_input_is_ignored() {
        let mut c = Conversation::default();
        assert!(!c.submit("   "));
        assert!(c.submit(" What is ML? "));
        assert_eq!(c.messages[1].content, "What is ML?");
        assert!(c.messages[2].typing);
        assert!(!c.submit("another"));
        assert_eq!(c.messages.len(), 3);
    }

    #[test]
    fn test_reply_reveals_then_frees() {
        let mut c = Conversation::default();
        c.submit("hi");
        c.begin_reply();
        assert!(c.messages.iter().all(|m| !m.typing));

        assert!(!c.reveal("Hola", 2));
        assert_eq!(c.messages.last().map(|m| m.content.as_str()), Some("Ho"));
        assert!(c.is_busy());

        assert!(c.reveal("Hola", 4));
        assert_eq!(c.messages.last().map(|m| m.content.as_str()), Some("Hola"));
        assert!(!c.is_busy());
    }

    #[test]
    fn test_pick_response_bounds() {
        assert_eq!(pick_response(0.0), CANNED_RESPONSES[0]);
        assert_eq!(pick_response(0.999), CANNED_RESPONSES[CANNED_RESPONSES.len() - 1]);
        assert_eq!(pick_response(1.0), CANNED_RESPONSES[CANNED_RESPONSES.len() - 1]);
    }
}

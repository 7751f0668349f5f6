//! Language selection and UI translations

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::utils::log_trace::{log_info, log_warn};
use crate::utils::store::{read, write};

const LANGUAGE_KEY: &str = "portfolio_language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }
}

/// (key, English, Spanish)
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    // navigation
    ("nav.home", "Home", "Inicio"),
    ("nav.projects", "Projects", "Proyectos"),
    ("nav.timeline", "Timeline", "Trayectoria"),
    ("nav.skills", "Skills", "Habilidades"),
    ("nav.ai_demo", "AI Demo", "Demo IA"),
    ("nav.contact", "Contact", "Contacto"),
    ("nav.menu", "Menu", "Menú"),
    // hero
    ("hero.explore", "Explore my work", "Explora mi trabajo"),
    ("hero.resume", "Download CV", "Descargar CV"),
    // projects
    ("projects.title", "Featured Projects", "Proyectos Destacados"),
    ("projects.description", "A selection of AI and data science work, from research prototypes to production systems.", "Una selección de trabajos de IA y ciencia de datos, desde prototipos de investigación hasta sistemas en producción."),
    ("projects.featured", "Featured", "Destacados"),
    ("projects.more", "More Projects", "Más Proyectos"),
    ("projects.demo", "Demo", "Demo"),
    ("projects.code", "Code", "Código"),
    ("projects.no_results", "No projects in this category yet.", "Todavía no hay proyectos en esta categoría."),
    ("category.all", "All", "Todos"),
    ("category.ml", "Machine Learning", "Machine Learning"),
    ("category.ai", "Artificial Intelligence", "Inteligencia Artificial"),
    ("category.data_science", "Data Science", "Ciencia de Datos"),
    ("category.deep_learning", "Deep Learning", "Deep Learning"),
    // timeline
    ("timeline.title", "Project Timeline", "Línea de Tiempo"),
    ("timeline.description", "A chronological journey through my most impactful AI and data science projects, showcasing innovation and real-world applications.", "Un recorrido cronológico por mis proyectos de IA y ciencia de datos con mayor impacto, mostrando innovación y aplicaciones reales."),
    ("timeline.status.completed", "completed", "completado"),
    ("timeline.status.in_progress", "in progress", "en progreso"),
    ("timeline.status.planned", "planned", "planeado"),
    ("timeline.status.unknown", "unknown", "desconocido"),
    ("timeline.technologies", "Technologies", "Tecnologías"),
    // skills
    ("skills.title", "Skills & Expertise", "Habilidades y Experiencia"),
    ("skills.description", "Tools and disciplines I use every day to turn data into decisions.", "Herramientas y disciplinas que uso a diario para convertir datos en decisiones."),
    ("skills.programming", "Programming", "Programación"),
    ("skills.ml_ai", "ML / AI", "ML / IA"),
    ("skills.tools", "Tools", "Herramientas"),
    ("skills.data", "Data", "Datos"),
    ("skills.additional", "Additional Skills", "Habilidades Adicionales"),
    ("skills.certifications", "Certifications", "Certificaciones"),
    ("skills.radar_title", "Skills Radar", "Radar de Habilidades"),
    // ai demo
    ("ai_demo.title", "AI Chat Demo", "Demo de Chat IA"),
    ("ai_demo.description", "Experience the power of conversational AI. This interactive demo showcases advanced natural language processing and machine learning capabilities.", "Experimenta el poder de la IA conversacional. Esta demo interactiva muestra capacidades avanzadas de procesamiento de lenguaje natural y aprendizaje automático."),
    ("ai_demo.online", "Online", "En línea"),
    ("ai_demo.placeholder", "Ask me anything about AI...", "Pregúntame lo que quieras sobre IA..."),
    ("ai_demo.quick_questions", "Quick questions", "Preguntas rápidas"),
    ("ai_demo.expand", "Expand", "Expandir"),
    ("ai_demo.collapse", "Collapse", "Contraer"),
    ("ai_demo.send", "Send", "Enviar"),
    // contact
    ("contact.title", "Get In Touch", "Contacto"),
    ("contact.description", "Have a project in mind or want to collaborate? Let's talk.", "¿Tienes un proyecto en mente o quieres colaborar? Hablemos."),
    ("contact.get_in_touch", "Contact Information", "Información de Contacto"),
    ("contact.email", "Email", "Correo"),
    ("contact.phone", "Phone", "Teléfono"),
    ("contact.location", "Location", "Ubicación"),
    ("contact.follow", "Follow me", "Sígueme"),
    ("contact.availability", "Availability", "Disponibilidad"),
    ("contact.freelance", "Freelance projects", "Proyectos freelance"),
    ("contact.full_time", "Full-time roles", "Puestos a tiempo completo"),
    ("contact.consulting", "Consulting", "Consultoría"),
    ("contact.available", "Available", "Disponible"),
    ("contact.open_to_offers", "Open to offers", "Abierto a ofertas"),
    ("contact.send_message", "Send a Message", "Enviar un Mensaje"),
    ("contact.name", "Name", "Nombre"),
    ("contact.subject", "Subject", "Asunto"),
    ("contact.message", "Message", "Mensaje"),
    ("contact.name_placeholder", "Your full name", "Tu nombre completo"),
    ("contact.subject_placeholder", "What's this about?", "¿De qué se trata?"),
    ("contact.message_placeholder", "Tell me about your project...", "Cuéntame sobre tu proyecto..."),
    ("contact.send", "Send Message", "Enviar Mensaje"),
    ("contact.sending", "Sending...", "Enviando..."),
    ("contact.sent", "Message sent successfully!", "¡Mensaje enviado con éxito!"),
    // footer
    ("footer.copyright", "© 2025 AI & Data Science Portfolio. All rights reserved.", "© 2025 Portafolio de IA y Ciencia de Datos. Todos los derechos reservados."),
    ("footer.powered", "Built with Rust, Leptos and WebAssembly", "Hecho con Rust, Leptos y WebAssembly"),
    // language switcher
    ("language.changed", "Language changed", "Idioma cambiado"),
    ("language.changed_to", "Changed to English", "Cambiado a Español"),
    ("language.switch_to", "Switch to Spanish", "Cambiar a inglés"),
    // admin
    ("admin.admin_access", "Admin access", "Acceso admin"),
    ("admin.admin_panel", "Admin panel", "Panel de administración"),
    ("admin.private_access", "Private access", "Acceso privado"),
    ("admin.user", "User (email)", "Usuario (email)"),
    ("admin.password", "Password", "Contraseña"),
    ("admin.login", "Sign in", "Entrar"),
    ("admin.access_denied", "Access denied: wrong credentials", "Acceso denegado: credenciales incorrectas"),
    ("admin.logout", "Log out", "Cerrar sesión"),
    ("admin.close", "Close", "Cerrar"),
    ("admin.profile", "Profile", "Perfil"),
    ("admin.projects", "Projects", "Proyectos"),
    ("admin.skills", "Skills", "Skills"),
    ("admin.radar", "Radar", "Radar"),
    ("admin.timeline", "Timeline", "Timeline"),
    ("admin.certifications", "Certifications", "Certificaciones"),
    ("admin.diagnostics", "Diagnostics", "Diagnóstico"),
    ("admin.new", "New", "Nuevo"),
    ("admin.new_entry", "New entry", "Nueva entrada"),
    ("admin.edit_entry", "Edit entry", "Editar entrada"),
    ("admin.edit", "Edit", "Editar"),
    ("admin.delete", "Delete", "Eliminar"),
    ("admin.save", "Save", "Guardar"),
    ("admin.cancel", "Cancel", "Cancelar"),
    ("admin.add", "Add", "Añadir"),
    ("admin.empty", "Nothing stored yet. The site is showing its built-in content.", "Aún no hay datos guardados. El sitio muestra su contenido predeterminado."),
    ("admin.created", "created", "creado"),
    ("admin.updated", "updated", "actualizado"),
    ("admin.deleted", "deleted", "eliminado"),
    ("admin.save_failed", "Could not save", "No se pudo guardar"),
    ("admin.delete_failed", "Could not delete", "No se pudo eliminar"),
    ("admin.load_failed", "Could not load stored data", "No se pudieron cargar los datos"),
    ("admin.profile_saved", "Profile updated", "Perfil actualizado"),
    ("admin.save_profile", "Save profile", "Guardar perfil"),
    ("admin.logs_download", "Download log", "Descargar registro"),
    ("admin.logs_clear", "Clear log", "Borrar registro"),
    ("admin.logs_cleared", "Log cleared", "Registro borrado"),
    ("admin.logs_entries", "entries", "entradas"),
    ("admin.logs_hint", "Recent storage and admin activity, kept in this browser only.", "Actividad reciente de almacenamiento y administración, guardada solo en este navegador."),
    // form fields
    ("field.title", "Title", "Título"),
    ("field.name", "Name", "Nombre"),
    ("field.category", "Category", "Categoría"),
    ("field.description", "Short description", "Descripción corta"),
    ("field.long_description", "Long description", "Descripción larga"),
    ("field.technologies", "Technologies", "Tecnologías"),
    ("field.add_technology", "Add technology", "Agregar tecnología"),
    ("field.image_url", "Image URL", "URL de imagen"),
    ("field.demo_url", "Demo URL", "URL de demo"),
    ("field.github_url", "GitHub URL", "URL de GitHub"),
    ("field.featured", "Featured project", "Proyecto destacado"),
    ("field.icon", "Icon (emoji)", "Icono (emoji)"),
    ("field.level", "Level", "Nivel"),
    ("field.color", "Color", "Color"),
    ("field.date", "Date (YYYY-MM)", "Fecha (YYYY-MM)"),
    ("field.status", "Status", "Estado"),
    ("field.impact", "Impact", "Impacto"),
    ("field.issuer", "Issuer", "Emisor"),
    ("field.year", "Year", "Año"),
    ("field.title_en", "Title (English)", "Título (Inglés)"),
    ("field.title_es", "Title (Spanish)", "Título (Español)"),
    ("field.description_en", "Description (English)", "Descripción (Inglés)"),
    ("field.description_es", "Description (Spanish)", "Descripción (Español)"),
    ("field.email", "Email", "Email"),
    ("field.resume_url", "Resume URL", "URL del CV"),
    ("field.linkedin_url", "LinkedIn URL", "URL de LinkedIn"),
    ("field.twitter_url", "Twitter URL", "URL de Twitter"),
    ("field.phone", "Phone", "Teléfono"),
    ("field.location", "Location", "Ubicación"),
    // entity names
    ("entity.project", "Project", "Proyecto"),
    ("entity.skill", "Skill", "Skill"),
    ("entity.radar_skill", "Radar skill", "Radar skill"),
    ("entity.timeline", "Timeline entry", "Proyecto de timeline"),
    ("entity.certification", "Certification", "Certificación"),
];

/// Looks up `key`; unknown keys render as themselves.
pub fn translate(lang: Language, key: &'static str) -> &'static str {
    TRANSLATIONS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, es)| match lang {
            Language::En => *en,
            Language::Es => *es,
        })
        .unwrap_or(key)
}

/// Language context shared by every component
#[derive(Clone, Copy)]
pub struct I18n {
    pub language: RwSignal<Language>,
}

impl I18n {
    pub fn t(&self, key: &'static str) -> &'static str {
        translate(self.language.get(), key)
    }

    pub fn lang(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, lang: Language) {
        self.language.set(lang);
        if let Err(e) = write(LANGUAGE_KEY, &lang) {
            log_warn("i18n", &format!("could not persist language: {}", e));
        }
        log_info("i18n", &format!("language set to {}", lang.code()));
    }
}

pub fn provide_i18n() -> I18n {
    let initial = match read::<Language>(LANGUAGE_KEY) {
        Ok(lang) => lang.unwrap_or_default(),
        Err(e) => {
            log_warn("i18n", &format!("using default language: {}", e));
            Language::default()
        }
    };
    let i18n = I18n {
        language: create_rw_signal(initial),
    };
    provide_context(i18n);
    i18n
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_translate_known_and_unknown_keys() {
        assert_eq!(translate(Language::En, "hero.explore"), "Explore my work");
        assert_eq!(translate(Language::Es, "hero.explore"), "Explora mi trabajo");
        assert_eq!(translate(Language::Es, "missing.key"), "missing.key");
    }

    #[test]
    fn test_translation_keys_are_unique_and_filled() {
        let mut seen = HashSet::new();
        for (key, en, es) in TRANSLATIONS {
            assert!(seen.insert(*key), "duplicate key {}", key);
            assert!(!en.is_empty() && !es.is_empty(), "empty text for {}", key);
        }
    }

    #[test]
    fn test_language_toggle_and_serde() {
        assert_eq!(Language::En.toggled(), Language::Es);
        assert_eq!(Language::Es.toggled(), Language::En);
        assert_eq!(serde_json::to_string(&Language::Es).unwrap(), "\"es\"");
    }

    #[test]
    fn test_status_and_entity_labels_are_translated() {
        use crate::models::{Certification, Entity, Project, RadarSkill, Skill, TimelineProject, TimelineStatus};
        let keys = [
            Project::LABEL_KEY,
            Skill::LABEL_KEY,
            RadarSkill::LABEL_KEY,
            TimelineProject::LABEL_KEY,
            Certification::LABEL_KEY,
            "admin.logs_entries",
            TimelineStatus::Completed.label_key(),
            TimelineStatus::InProgress.label_key(),
            TimelineStatus::Planned.label_key(),
            TimelineStatus::Unknown.label_key(),
        ];
        for key in keys {
            assert_ne!(translate(Language::En, key), key);
        }
    }
}

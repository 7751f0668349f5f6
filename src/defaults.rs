//! Built-in content shown until the admin panel stores its own

use crate::models::{Certification, Project, RadarSkill, Skill, TimelineProject, TimelineStatus};

pub const DEFAULT_NAME: &str = "Tu Nombre";
pub const DEFAULT_TITLE: &str = "AI & Data Science Visionary";
pub const DEFAULT_DESCRIPTION: &str =
    "Especialista en inteligencia artificial y ciencia de datos con pasión por crear soluciones innovadoras.";
pub const DEFAULT_EMAIL: &str = "your.email@example.com";
pub const DEFAULT_PHONE: &str = "+1 (555) 123-4567";
pub const DEFAULT_LOCATION: &str = "San Francisco, CA";
pub const FALLBACK_PROJECT_IMAGE: &str =
    "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=500&h=300&fit=crop";

pub const ADDITIONAL_SKILLS: &[&str] = &[
    "Neural Networks", "Deep Learning", "Computer Vision", "NLP", "Time Series",
    "Reinforcement Learning", "MLOps", "Data Visualization", "Statistical Analysis",
    "Big Data", "Cloud Computing", "API Development", "Database Design",
    "Agile Methodology", "Research & Development",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            title: "Neural Style Transfer".into(),
            description: "AI-powered artistic style transformation using deep neural networks".into(),
            long_description: Some(
                "Advanced implementation of neural style transfer using TensorFlow and PyTorch. \
                 Combines content and style images to create unique artistic renditions with \
                 real-time processing capabilities."
                    .into(),
            ),
            category: "Deep Learning".into(),
            technologies: strings(&["Python", "TensorFlow", "PyTorch", "OpenCV", "Flask"]),
            image_url: Some("https://images.unsplash.com/photo-1541961017774-22349e4a1262?w=500&h=300&fit=crop".into()),
            demo_url: Some("#".into()),
            github_url: Some("#".into()),
            featured: true,
        },
        Project {
            id: "2".into(),
            title: "Predictive Analytics Dashboard".into(),
            description: "Real-time business intelligence with machine learning predictions".into(),
            long_description: Some(
                "Comprehensive dashboard for business analytics featuring predictive models, \
                 real-time data visualization, and automated reporting systems built with modern \
                 web technologies."
                    .into(),
            ),
            category: "Data Science".into(),
            technologies: strings(&["React", "D3.js", "Python", "Scikit-learn", "PostgreSQL"]),
            image_url: Some("https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=500&h=300&fit=crop".into()),
            demo_url: Some("#".into()),
            github_url: Some("#".into()),
            featured: true,
        },
    ]
}

pub fn skills() -> Vec<Skill> {
    let skill = |id: &str, name: &str, level: u8, category: &str, icon: &str| Skill {
        id: id.into(),
        name: name.into(),
        level,
        category: category.into(),
        icon: Some(icon.into()),
    };
    vec![
        skill("1", "Python", 95, "Programming", "🐍"),
        skill("2", "TensorFlow", 90, "ML/AI", "🧠"),
        skill("3", "Docker", 80, "Tools", "🐳"),
        skill("4", "Pandas", 95, "Data", "🐼"),
    ]
}

pub fn certifications() -> Vec<Certification> {
    let cert = |id: &str, title: &str, issuer: &str, year: &str, icon: &str| Certification {
        id: id.into(),
        title: title.into(),
        issuer: issuer.into(),
        year: year.into(),
        icon: Some(icon.into()),
    };
    vec![
        cert("1", "AWS Certified Machine Learning", "Amazon Web Services", "2024", "🏆"),
        cert("2", "TensorFlow Developer Certificate", "Google", "2023", "🥇"),
        cert("3", "Data Science Specialization", "Johns Hopkins University", "2023", "🎓"),
    ]
}

pub fn radar_skills() -> Vec<RadarSkill> {
    let radar = |id: &str, skill: &str, level: u8, category: &str, color: &str| RadarSkill {
        id: id.into(),
        skill: skill.into(),
        level,
        category: category.into(),
        color: color.into(),
    };
    vec![
        radar("1", "Machine Learning", 95, "AI/ML", "#00D4FF"),
        radar("2", "Deep Learning", 90, "AI/ML", "#FF6B35"),
        radar("3", "Python", 95, "Programming", "#00D4FF"),
        radar("4", "TensorFlow", 88, "Frameworks", "#FF6B35"),
        radar("5", "Data Analysis", 92, "Data Science", "#00D4FF"),
        radar("6", "Computer Vision", 85, "AI/ML", "#FF6B35"),
        radar("7", "NLP", 82, "AI/ML", "#00D4FF"),
        radar("8", "Statistics", 88, "Mathematics", "#FF6B35"),
    ]
}

pub fn timeline() -> Vec<TimelineProject> {
    let entry = |id: &str,
                 title: &str,
                 description: &str,
                 date: &str,
                 category: &str,
                 technologies: &[&str],
                 image: &str,
                 status: TimelineStatus,
                 impact: &str,
                 demo: bool,
                 github: bool| TimelineProject {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        date: date.into(),
        category: category.into(),
        technologies: strings(technologies),
        image: image.into(),
        status,
        impact: impact.into(),
        demo_url: demo.then(|| "#".to_string()),
        github_url: github.then(|| "#".to_string()),
    };
    vec![
        entry(
            "1",
            "AI-Powered Medical Diagnosis System",
            "Deep learning model for early disease detection using medical imaging with 94% accuracy.",
            "2024-01",
            "Healthcare AI",
            &["PyTorch", "OpenCV", "FastAPI", "Docker"],
            "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=400&h=200&fit=crop",
            TimelineStatus::Completed,
            "10,000+ patients screened",
            true,
            true,
        ),
        entry(
            "2",
            "Real-time Fraud Detection Engine",
            "Machine learning system processing 1M+ transactions per second with sub-millisecond latency.",
            "2023-11",
            "FinTech",
            &["Apache Kafka", "TensorFlow", "Redis", "Kubernetes"],
            "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=400&h=200&fit=crop",
            TimelineStatus::Completed,
            "$2M+ fraud prevented",
            true,
            true,
        ),
        entry(
            "3",
            "Autonomous Drone Navigation",
            "Computer vision and reinforcement learning for autonomous drone flight in complex environments.",
            "2023-08",
            "Robotics",
            &["ROS", "OpenCV", "PyTorch", "CUDA"],
            "https://images.unsplash.com/photo-1473968512647-3e447244af8f?w=400&h=200&fit=crop",
            TimelineStatus::Completed,
            "99.2% navigation accuracy",
            true,
            false,
        ),
        entry(
            "4",
            "Climate Change Prediction Model",
            "Advanced time series forecasting using satellite data and weather patterns.",
            "2023-05",
            "Climate Science",
            &["Prophet", "Pandas", "Plotly", "AWS"],
            "https://images.unsplash.com/photo-1569163139394-de44cb5894c4?w=400&h=200&fit=crop",
            TimelineStatus::Completed,
            "Published in Nature AI",
            false,
            true,
        ),
        entry(
            "5",
            "Neural Architecture Search Platform",
            "Automated ML pipeline for discovering optimal neural network architectures.",
            "2024-03",
            "AutoML",
            &["PyTorch", "Ray", "MLflow", "Kubernetes"],
            "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=400&h=200&fit=crop",
            TimelineStatus::InProgress,
            "40% faster model training",
            false,
            true,
        ),
        entry(
            "6",
            "Quantum-Classical Hybrid AI",
            "Exploring quantum computing applications in machine learning optimization.",
            "2024-06",
            "Quantum AI",
            &["Qiskit", "PennyLane", "TensorFlow Quantum"],
            "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=400&h=200&fit=crop",
            TimelineStatus::Planned,
            "Research collaboration",
            false,
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entity, PROJECT_CATEGORIES, SKILL_CATEGORIES};

    #[test]
    fn test_defaults_are_valid_records() {
        assert!(projects().iter().all(|p| p.validate().is_ok()));
        assert!(skills().iter().all(|s| s.validate().is_ok()));
        assert!(radar_skills().iter().all(|r| r.validate().is_ok()));
        assert!(timeline().iter().all(|t| t.validate().is_ok()));
        assert!(certifications().iter().all(|c| c.validate().is_ok()));
    }

    #[test]
    fn test_default_categories_are_known() {
        assert!(projects().iter().all(|p| PROJECT_CATEGORIES.contains(&p.category.as_str())));
        assert!(skills().iter().all(|s| SKILL_CATEGORIES.contains(&s.category.as_str())));
    }
}

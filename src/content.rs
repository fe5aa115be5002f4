use crate::{
    constants::SECTION_IDS,
    domain::{
        About, ContactInfo, Footer, NavItem, Portfolio, Profile, ProjectRecord, ProjectsSection,
        SectionId, Skill, SkillCategory, SocialLink, SocialPlatform,
    },
};

/// Built-in page content, used when no content file exists yet.
pub fn default_portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Nicolás Garrido".to_string(),
            title: "Desarrollador Full Stack".to_string(),
            subtitle: "Especializado en React, TypeScript y tecnologías modernas".to_string(),
            description: "Apasionado por crear experiencias web excepcionales que combinan \
                diseño elegante con código limpio y eficiente. Me especializo en desarrollo \
                frontend con React y backend con Node.js."
                .to_string(),
            cv_path: Some("/cv-nicolas-garrido.pdf".to_string()),
        },
        nav_items: default_nav_items(),
        projects_section: ProjectsSection {
            title: "Proyectos Destacados".to_string(),
            description: "Una selección de mis trabajos más recientes que demuestran mis \
                habilidades en desarrollo full stack."
                .to_string(),
            show_filters: true,
            show_load_more: true,
        },
        projects: default_projects(),
        about: About {
            title: "Sobre Mí".to_string(),
            description: "Soy un estudiante de desarrollo web apasionado por la tecnología y \
                el aprendizaje continuo. A través de proyectos académicos y personales, he \
                desarrollado habilidades tanto en frontend como en backend."
                .to_string(),
            profile_image_url: Some("/profile-nicolas.jpg".to_string()),
            years_of_experience: 2,
            completed_projects: 8,
            show_stats: true,
            skills: default_skills(),
        },
        contact: ContactInfo {
            email: Some("contacto@nicolasgarrido.dev".to_string()),
            phone: Some("+56 9 1234 5678".to_string()),
            location: Some("Santiago, Chile".to_string()),
        },
        social_links: vec![
            SocialLink {
                platform: SocialPlatform::Github,
                url: "https://github.com/nicolasgarrido".to_string(),
                label: "GitHub".to_string(),
            },
            SocialLink {
                platform: SocialPlatform::Linkedin,
                url: "https://linkedin.com/in/nicolasgarrido".to_string(),
                label: "LinkedIn".to_string(),
            },
        ],
        footer: Footer {
            blurb: "Desarrollador Full Stack apasionado por crear experiencias web \
                excepcionales con tecnologías modernas."
                .to_string(),
            copyright: None,
            current_year: None,
            show_contact_section: true,
        },
    }
}

pub fn default_nav_items() -> Vec<NavItem> {
    [
        (SECTION_IDS.hero, "Inicio"),
        (SECTION_IDS.projects, "Proyectos"),
        (SECTION_IDS.about, "Sobre mí"),
        (SECTION_IDS.contact, "Contacto"),
    ]
    .into_iter()
    .map(|(key, label)| NavItem {
        key: SectionId::new(key),
        label: label.to_string(),
    })
    .collect()
}

fn default_projects() -> Vec<ProjectRecord> {
    let record = |id: &str,
                  title: &str,
                  description: &str,
                  technologies: &[&str],
                  category: &str,
                  completed: &str| ProjectRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(ToString::to_string).collect(),
        category: Some(category.to_string()),
        github_url: None,
        demo_url: None,
        image_url: None,
        featured: None,
        completed_date: Some(completed.to_string()),
    };

    vec![
        ProjectRecord {
            featured: Some(true),
            image_url: Some("assets/images/unnamed.png".to_string()),
            ..record(
                "1",
                "7upper",
                "Aplicación móvil que busca impulsar el crecimiento de la alimentación sana \
                 en la comunidad chilena, especialmente de usuarios fitness y usuarios con \
                 falta de tiempo para cocinar.",
                &["React", "TypeScript", "Node.js", "Firebase", "Flowise"],
                "Cloud Engineer, AI Orchestration",
                "2025",
            )
        },
        ProjectRecord {
            featured: Some(true),
            github_url: Some("https://github.com/nicolasgarrido/dashboard".to_string()),
            demo_url: Some("https://dashboard-demo.nicolasgarrido.dev".to_string()),
            ..record(
                "2",
                "Dashboard Analítico",
                "Dashboard interactivo para análisis de datos con gráficos en tiempo real, \
                 filtros avanzados y exportación de reportes.",
                &["React", "D3.js", "Chart.js", "TypeScript", "Python"],
                "Frontend",
                "2024",
            )
        },
        ProjectRecord {
            github_url: Some("https://github.com/nicolasgarrido/api-rest".to_string()),
            ..record(
                "3",
                "API REST Escalable",
                "API RESTful robusta con autenticación JWT, documentación Swagger y \
                 deployment automatizado.",
                &["Node.js", "Express", "PostgreSQL", "JWT", "Docker"],
                "Backend",
                "2023",
            )
        },
        ProjectRecord {
            github_url: Some("https://github.com/nicolasgarrido/mobile-app".to_string()),
            demo_url: Some(
                "https://play.google.com/store/apps/details?id=com.nicolasgarrido.app"
                    .to_string(),
            ),
            ..record(
                "4",
                "App Móvil React Native",
                "Aplicación móvil cross-platform con autenticación biométrica, \
                 sincronización offline y push notifications.",
                &["React Native", "TypeScript", "Redux", "Firebase"],
                "Mobile",
                "2024",
            )
        },
        ProjectRecord {
            featured: Some(true),
            github_url: Some("https://github.com/nicolasgarrido/crm-system".to_string()),
            demo_url: Some("https://crm-demo.nicolasgarrido.dev".to_string()),
            ..record(
                "5",
                "Sistema de Gestión CRM",
                "CRM completo con gestión de clientes, pipeline de ventas, reportes \
                 automáticos e integración con email marketing.",
                &["Vue.js", "Laravel", "MySQL", "Redis", "AWS"],
                "Full Stack",
                "2023",
            )
        },
        ProjectRecord {
            github_url: Some("https://github.com/nicolasgarrido/elearning".to_string()),
            demo_url: Some("https://learn.nicolasgarrido.dev".to_string()),
            ..record(
                "6",
                "Plataforma de E-learning",
                "Plataforma educativa con videos interactivos, quizzes, progreso de \
                 estudiantes y sistema de certificaciones.",
                &["Next.js", "Prisma", "PostgreSQL", "Stripe", "AWS S3"],
                "Full Stack",
                "2024",
            )
        },
    ]
}

fn default_skills() -> Vec<Skill> {
    [
        ("React", 75, SkillCategory::Frontend),
        ("JavaScript", 80, SkillCategory::Frontend),
        ("HTML/CSS", 85, SkillCategory::Frontend),
        ("TypeScript", 65, SkillCategory::Frontend),
        ("Node.js", 60, SkillCategory::Backend),
        ("Express", 55, SkillCategory::Backend),
        ("MongoDB", 50, SkillCategory::Backend),
        ("PostgreSQL", 45, SkillCategory::Backend),
        ("Git", 70, SkillCategory::Tools),
        ("Docker", 40, SkillCategory::Tools),
        ("Figma", 60, SkillCategory::Tools),
        ("React Native", 35, SkillCategory::Other),
    ]
    .into_iter()
    .map(|(name, level, category)| Skill {
        name: name.to_string(),
        level,
        category,
    })
    .collect()
}

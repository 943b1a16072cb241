//! Compiled-in display copy: every card list, timeline entry, and external
//! link the page renders. Nothing here is user-configurable at runtime.

/// A featured project card in the fan deck.
#[derive(Debug, Clone, Copy)]
pub struct ProjectCard {
    pub id: &'static str,
    pub title: &'static str,
    pub badge: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// External project URL; None for in-house systems with no public site.
    pub link: Option<&'static str>,
    pub open_label: &'static str,
}

pub const DECK_CARDS: [ProjectCard; 5] = [
    ProjectCard {
        id: "nar",
        title: "Naraakum",
        badge: "Home Healthcare",
        description: "Naraakum is a platform for home healthcare, remote medical consultations, and remote blood pressure and glucose monitoring.",
        image: "assets/nar.png",
        link: Some("https://www.naraakum.com/"),
        open_label: "Open Naraakum project",
    },
    ProjectCard {
        id: "qqs",
        title: "QQS",
        badge: "Assessment Security",
        description: "QQS is a university exam management system in Saudi Arabia with strong AI-powered anti-cheating protection.",
        image: "assets/qq-test.png",
        link: Some("https://www.qqassessment.com/"),
        open_label: "Open QQS project",
    },
    ProjectCard {
        id: "his",
        title: "HIS",
        badge: "Healthcare Operations",
        description: "HIS provides complete healthcare center management, including social insurance integration and end-to-end billing solutions.",
        image: "assets/his.png",
        link: None,
        open_label: "HIS project (no external link)",
    },
    ProjectCard {
        id: "mospkat",
        title: "Mospkat",
        badge: "Competition Learning",
        description: "Mospkat provides courses for global competitions like Kangaroo for children and also organizes competition exams.",
        image: "assets/mospkat.png",
        link: Some("https://www.musabakat.com/ar/index"),
        open_label: "Open Mospkat project",
    },
    ProjectCard {
        id: "sytar",
        title: "Sytar",
        badge: "Mental Health",
        description: "Sytar supports the mental health of Saudi citizens and also enables applying as a mental health doctor.",
        image: "assets/sytar.png",
        link: Some("https://www.psyter.com/en/home-page"),
        open_label: "Open Sytar project",
    },
];

/// Milestone category on the road timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Work,
    Teaching,
    Volunteer,
    Education,
}

impl Category {
    /// Glyph shown in the milestone badge.
    pub fn glyph(self) -> &'static str {
        match self {
            Category::Work => "💼",
            Category::Teaching => "🎓",
            Category::Volunteer => "🤝",
            Category::Education => "📚",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TimelineItem {
    pub category: Category,
    pub title: &'static str,
    pub date: &'static str,
    pub bullets: &'static [&'static str],
}

pub const TIMELINE_ITEMS: [TimelineItem; 9] = [
    TimelineItem {
        category: Category::Work,
        title: "Senior Product Owner — InnoTech",
        date: "May 2025 – Present",
        bullets: &[
            "Leading cross-functional collaboration (medical, business, engineering) to align vision and improve healthcare service quality.",
            "Building roadmaps and backlogs for healthcare systems (Dialysis & Blood Purification) and managing a remote team end-to-end.",
        ],
    },
    TimelineItem {
        category: Category::Teaching,
        title: "UI/UX Instructor (Part-Time) — Amit Learning",
        date: "Jan 2025 – Present",
        bullets: &[
            "Teaching UI/UX and designing a practical learning curriculum.",
            "Reviewing assignments and mentoring learners through hands-on projects.",
        ],
    },
    TimelineItem {
        category: Category::Work,
        title: "Product Owner — Qeema Tech",
        date: "Apr 2024 – May 2025",
        bullets: &[
            "Aligning stakeholders and technical teams around product vision and measurable outcomes.",
            "Continuously refining the backlog and writing user stories based on market research and user needs.",
        ],
    },
    TimelineItem {
        category: Category::Work,
        title: "Product Owner — Make your miracle (Darby Platform)",
        date: "Feb 2024 – May 2024",
        bullets: &[
            "Leading product discovery: defining goals, identifying pain points, and improving B2B/B2C experiences.",
            "Prioritization and roadmapping across stakeholders, design, and development to improve shipping and logistics experience.",
        ],
    },
    TimelineItem {
        category: Category::Work,
        title: "Product Owner — Bank De Cairo",
        date: "Oct 2023 – Dec 2023",
        bullets: &[
            "Enhancing mobile banking features and prioritizing high-impact improvements.",
            "Achieved +22% retention through iterative backlog refinement and continuous UX/product iterations.",
            "Coordinating Agile sprints with UX, dev, and QA.",
        ],
    },
    TimelineItem {
        category: Category::Work,
        title: "UI/UX — SOFCO",
        date: "Feb 2023 – Sep 2023",
        bullets: &[
            "Conducting user research and task analysis to identify operational and management pain points.",
            "Creating wireframes and low-fidelity prototypes to validate UX solutions with stakeholders.",
        ],
    },
    TimelineItem {
        category: Category::Teaching,
        title: "Instructor (Volunteer) — Three Dimensions of Success / Software Council",
        date: "Apr 2022 – Sep 2022",
        bullets: &["Volunteering as an instructor and sharing knowledge in software and digital skills."],
    },
    TimelineItem {
        category: Category::Volunteer,
        title: "Volunteer — Resala",
        date: "May 2021 – Sep 2021",
        bullets: &["Managing digital platforms to improve communication, system updates, and user support guidance."],
    },
    TimelineItem {
        category: Category::Education,
        title: "Education — Helwan University (Business Information Systems)",
        date: "Grade: Excellent",
        bullets: &["Business Information Systems, Helwan University."],
    },
];

/// A logo in the "Company Worked With" strip.
#[derive(Debug, Clone, Copy)]
pub struct Company {
    pub id: &'static str,
    pub name: &'static str,
    pub logo: &'static str,
}

pub const COMPANIES: [Company; 5] = [
    Company { id: "innotech", name: "InnoTech", logo: "assets/innotech_logo.jpg" },
    Company { id: "qeema-tech", name: "Qeema Tech", logo: "assets/qeema_tech_logo.jpg" },
    Company { id: "make-your-miracle", name: "Make Your Miracle", logo: "assets/mym_logo.jpg" },
    Company { id: "bank-de-cairo", name: "Bank De Cairo", logo: "assets/bank_de_cairo.jpg" },
    Company { id: "sofco", name: "SOFCO", logo: "assets/sofco.jpg" },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub glyph: &'static str,
    pub new_tab: bool,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "Behance", url: "https://www.behance.net/bassemahmed19", glyph: "Bē", new_tab: true },
    SocialLink { label: "GitHub", url: "https://github.com/Bassem-product-manager", glyph: "", new_tab: true },
    SocialLink { label: "WhatsApp", url: "https://api.whatsapp.com/send?phone=020163344708", glyph: "🟢", new_tab: true },
    SocialLink { label: "Email", url: "mailto:bassem.ahmed0202@gmail.com", glyph: "✉", new_tab: false },
];

/// Where a gallery card sits in the showcase layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GallerySlot {
    Center,
    LeftTop,
    RightTop,
    Bottom,
}

#[derive(Debug, Clone, Copy)]
pub struct GalleryCard {
    pub id: &'static str,
    pub title: &'static str,
    pub tag: &'static str,
    pub image: &'static str,
    pub url: &'static str,
    pub slot: GallerySlot,
}

pub const GALLERY_CARDS: [GalleryCard; 4] = [
    GalleryCard {
        id: "startup",
        title: "Ecommerce",
        tag: "ECOMMERCE",
        image: "assets/startup.png",
        url: "https://ecommerce-react-app34.netlify.app/",
        slot: GallerySlot::Center,
    },
    GalleryCard {
        id: "travel",
        title: "Travel Agency",
        tag: "TRAVEL",
        image: "assets/plan.png",
        url: "https://travel-agency-2859fc.netlify.app/",
        slot: GallerySlot::LeftTop,
    },
    GalleryCard {
        id: "bassem",
        title: "Full CRUD Operation",
        tag: "CRUD",
        image: "assets/bassem.png",
        url: "https://crud-system-pure-js.netlify.app/",
        slot: GallerySlot::RightTop,
    },
    GalleryCard {
        id: "blood",
        title: "Blood Donation",
        tag: "BLOOD",
        image: "assets/blood.png",
        url: "https://blood-donation-d97751.netlify.app/home#",
        slot: GallerySlot::Bottom,
    },
];

pub const GALLERY_PILLS: [&str; 5] = ["HTML", "CSS", "JAVASCRIPT", "REACT", "VITE"];
pub const GALLERY_FOLDER_URL: &str = "https://app.netlify.com/teams/bassem123450/projects";

// Hero copy and assets.
pub const HERO_KICKER: &str = "Technical Product Manager";
pub const HERO_TITLE: &str =
    "I'm Bassem Ahmed, Technical Product Manager with 4 Years of Experience";
pub const HERO_SUBTITLE: &str =
    "I build digital products that do not just launch, they grow and are AI-powered.";
pub const HERO_PHONE: &str = "tel:+201063344708";
pub const PORTRAIT_PRIMARY: &str = "assets/me_cropped.png";
pub const PORTRAIT_FALLBACK: &str = "assets/me.png";
pub const CV_FILE: &str = "assets/bassem_ahmed_cv.pdf";

pub const JET_IMAGE: &str = "assets/jet.png";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DECK_SLOTS;

    #[test]
    fn test_deck_card_count_matches_slot_count() {
        assert_eq!(DECK_CARDS.len(), DECK_SLOTS);
    }

    #[test]
    fn test_his_card_has_no_link() {
        let his = DECK_CARDS.iter().find(|c| c.id == "his").unwrap();
        assert!(his.link.is_none());
        assert!(DECK_CARDS.iter().filter(|c| c.link.is_some()).count() == 4);
    }

    #[test]
    fn test_card_ids_unique() {
        for (i, a) in DECK_CARDS.iter().enumerate() {
            for b in &DECK_CARDS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_external_links_are_absolute() {
        let links = DECK_CARDS
            .iter()
            .filter_map(|c| c.link)
            .chain(GALLERY_CARDS.iter().map(|c| c.url))
            .chain(std::iter::once(GALLERY_FOLDER_URL));
        for link in links {
            assert!(link.starts_with("https://"), "not absolute: {}", link);
        }
    }
}

//! Company copy that does not change between deployments.

pub const NAME: &str = "Sanjeevini Builders";
pub const LEGAL_NAME: &str = "Sanjeevini Services Pvt Ltd";
pub const SHORT_NAME: &str = "Sanjeevini";
pub const TAGLINE: &str = "Building Dreams, Crafting Spaces";
pub const HERO_SUBTITLE: &str = "Premium Construction & Interior Design in Bangalore";

pub const META_TITLE: &str =
    "Sanjeevini Builders | Premium Construction & Interior Design in Bangalore";
pub const META_DESCRIPTION: &str = "Building Dreams, Crafting Spaces. Premium construction and interior design services in Bangalore with 10+ years of expertise.";
pub const OG_TITLE: &str = "Sanjeevini Builders | Premium Construction & Interior Design";
pub const OG_DESCRIPTION: &str = "Transforming visions into reality across Bangalore with precision craftsmanship and innovative design.";

pub const ADDRESS_LINES: [&str; 2] = ["#28, 27th Main, BTM Layout,", "Bengaluru, Karnataka – 560068"];
pub const PHONES: [&str; 2] = ["9481545865", "8073365694"];
pub const EMAIL: &str = "info@sanjeevinibuilders.com";
pub const WHATSAPP_NUMBER: &str = "8867301822";
pub const WHATSAPP_LINK: &str = "https://wa.me/918867301822?text=Hi%20Sanjeevini%20Builders%2C%20I%20would%20like%20to%20discuss%20a%20project";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3887.5721849999997!2d77.6245!3d12.9716!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3bae1d0c0c0c0c0d%3A0x0!2sBTM%20Layout%2C%20Bengaluru%20560068!5e0!3m2!1sen!2sin!4v1234567890";

pub const BUSINESS_HOURS: [&str; 3] = [
    "Monday - Friday: 9:00 AM - 6:00 PM",
    "Saturday: 10:00 AM - 4:00 PM",
    "Sunday: Closed",
];

pub const ABOUT_INTRO: &str = "Established in 2025, we are a new-age real estate developer from Bengaluru, shaping the city's skyline through trust, design, and enduring quality. From premium villas to modern warehouses, our projects blend thoughtful design, durability, and sustainability to deliver lasting value.";
pub const HOME_ABOUT: &str = "Since 2015, Sanjeevini Builders has been transforming visions into reality across Bangalore with precision craftsmanship and innovative design. We believe that every structure tells a story, and we're committed to making yours extraordinary.";
pub const MISSION: &str = "To build sustainable spaces that enrich lives and create long-term value for our customers and stakeholders. We are committed to delivering quality, transparency, and timely execution in every project we undertake.";
pub const VISION: &str = "To be one of Bengaluru's most trusted and innovative real estate brands, delivering value through quality, transparency, and design excellence.";

/// Label/value pair used for stats and feature tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

pub const WHY_CHOOSE_US: [Highlight; 4] = [
    Highlight { label: "10+ Years Experience", value: "Proven Track Record" },
    Highlight { label: "50+ Completed Projects", value: "Portfolio Excellence" },
    Highlight { label: "Expert Team", value: "Architects & Engineers" },
    Highlight { label: "Quality Assured", value: "Timely Delivery" },
];

pub const STATS: [Highlight; 4] = [
    Highlight { label: "Established", value: "2025" },
    Highlight { label: "Service Areas", value: "6+" },
    Highlight { label: "Team Members", value: "25+" },
    Highlight { label: "Client Satisfaction", value: "100%" },
];

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Residential Apartments",
        description: "Premium apartments designed for modern urban living with quality finishes and amenities.",
    },
    Service {
        title: "Villa / Row House Development",
        description: "Luxury villas and row houses that combine elegance with functional design.",
    },
    Service {
        title: "Layout Formation & Land Development",
        description: "Comprehensive land development and layout planning services for optimal land utilization.",
    },
    Service {
        title: "Warehouse Development",
        description: "Modern, efficient warehouse facilities designed for logistics and industrial needs.",
    },
    Service {
        title: "Property Maintenance & Facility Management",
        description: "End-to-end property maintenance and facility management services.",
    },
    Service {
        title: "Commercial / Mixed-use Projects",
        description: "Innovative commercial and mixed-use developments that drive business growth.",
    },
];

pub const DIRECTORS: [TeamMember; 2] = [
    TeamMember {
        name: "Vijay Kummar M",
        role: "Director",
        image: "/professionals/Vijay_Kumar.jpg",
        bio: "With over 12 years of experience, Vijay leads operations and project delivery with a focus on quality and client satisfaction.",
    },
    TeamMember {
        name: "Diwkara V",
        role: "Director",
        image: "/professional-engineer.png",
        bio: "Divakar oversees engineering and execution, ensuring structural integrity and timely completion across all projects.",
    },
];

pub const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Appu",
        role: "Lead Architect",
        image: "/professional-architect.png",
        bio: "Designs modern, human-centric spaces blending form and function.",
    },
    TeamMember {
        name: "Edwin Pinto",
        role: "Senior Interior Designer",
        image: "/professionals/Interior-Designer.jpg",
        bio: "Creates refined interiors with durable materials and timeless style.",
    },
    TeamMember {
        name: "Vijay Kumar P",
        role: "Project Manager",
        image: "/professionals/vijay_kumar_p.jpg",
        bio: "Coordinates schedules, budgets, and teams to deliver on time.",
    },
    TeamMember {
        name: "Murthy",
        role: "Site Engineer",
        image: "/professional-engineer.png",
        bio: "Leads on-site execution with a safety-first approach.",
    },
];

/// `tel:` link for a local ten-digit number
pub fn tel_link(phone: &str) -> String {
    format!("tel:+91{phone}")
}

//! Static page content. Pure data: rendering the same arrays always yields
//! the same ordered sections, cards, and links.

pub const SITE_NAME: &str = "Review App";
pub const COPYRIGHT: &str = "© 2023 Review App. All rights reserved";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[PageLink] = &[
    PageLink { label: "Home", href: "/" },
    PageLink { label: "About", href: "/about" },
    PageLink { label: "Contact", href: "/contact" },
];

pub const FOOTER_LINKS: &[PageLink] = &[
    PageLink { label: "Home", href: "/" },
    PageLink { label: "About", href: "/about" },
    PageLink { label: "Contact Us", href: "/contact" },
    PageLink { label: "Terms", href: "/terms" },
    PageLink { label: "Refund Policy", href: "/refund-policy" },
    PageLink { label: "Privacy Policy", href: "/privacy-policy" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub name: &'static str,
    pub href: &'static str,
}

pub const SOCIALS: &[Social] = &[
    Social { name: "Twitter", href: "https://twitter.com/review-app" },
    Social { name: "Instagram", href: "https://instagram.com/review-app" },
    Social { name: "LinkedIn", href: "https://linkedin.com/review-app" },
    Social { name: "GitHub", href: "https://github.com/piyushgarg-dev/review-app" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Easy Integration",
        description: "Quickly add a review system to your website without the need for complex backend development.",
        icon: "workflow",
    },
    Feature {
        title: "User-Friendly Interface",
        description: "The Review App provides an intuitive interface for users to submit reviews and ratings.",
        icon: "user-check",
    },
    Feature {
        title: "Customization",
        description: "Customize the look and feel of the review widget to match your website's design.",
        icon: "wrench",
    },
    Feature {
        title: "Moderation",
        description: "Review submissions can be moderated to ensure quality and prevent spam.",
        icon: "search-check",
    },
    Feature {
        title: "Analytics",
        description: "Gain insights into user feedback with built-in analytics and reporting features.",
        icon: "area-chart",
    },
    Feature {
        title: "Scalable",
        description: "Designed to handle a growing number of reviews, making it suitable for websites of all sizes.",
        icon: "scaling",
    },
    Feature {
        title: "Responsive",
        description: "Review App is responsive and works seamlessly on various devices and screen sizes.",
        icon: "monitor",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkStepInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const HOW_IT_WORKS: &[WorkStepInfo] = &[
    WorkStepInfo {
        title: "Create an Application",
        description: "Sign up and create a review application for your website on Review App.",
        image: "assets/images/review-dashboard-dark.png",
    },
    WorkStepInfo {
        title: "Customize Widget",
        description: "Customize the review widget's appearance to match your website's branding.",
        image: "assets/images/review-form-dark.png",
    },
    WorkStepInfo {
        title: "Integration",
        description: "Integrate the provided code snippet into your website's pages where you want the review widget to appear.",
        image: "assets/images/review-form-light.png",
    },
    WorkStepInfo {
        title: "Gather Reviews",
        description: "Users visiting your website can easily submit reviews and ratings through the widget.",
        image: "assets/images/review-form-light.png",
    },
    WorkStepInfo {
        title: "Moderate Reviews",
        description: "Review submissions can be moderated through the Review App dashboard.",
        image: "assets/images/review-form-light.png",
    },
    WorkStepInfo {
        title: "Analytics and Insights",
        description: "Gain valuable insights from user reviews with built-in analytics and reporting.",
        image: "assets/images/review-form-light.png",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Hemath",
        role: "Frontend Lead",
        avatar: "https://avatars.githubusercontent.com/u/85151171?v=4",
    },
    TeamMember {
        name: "Piyush Garg",
        role: "Backend Lead",
        avatar: "https://avatars.githubusercontent.com/u/44976328?v=4",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_keep_their_order() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(labels, ["Home", "About", "Contact"]);
    }

    #[test]
    fn footer_links_keep_their_order() {
        let labels: Vec<_> = FOOTER_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            ["Home", "About", "Contact Us", "Terms", "Refund Policy", "Privacy Policy"]
        );
    }

    #[test]
    fn feature_titles_keep_their_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            [
                "Easy Integration",
                "User-Friendly Interface",
                "Customization",
                "Moderation",
                "Analytics",
                "Scalable",
                "Responsive",
            ]
        );
    }

    #[test]
    fn how_it_works_has_six_ordered_steps() {
        assert_eq!(HOW_IT_WORKS.len(), 6);
        assert_eq!(HOW_IT_WORKS[0].title, "Create an Application");
        assert_eq!(HOW_IT_WORKS[5].title, "Analytics and Insights");
    }

    #[test]
    fn socials_keep_their_order() {
        let names: Vec<_> = SOCIALS.iter().map(|s| s.name).collect();
        assert_eq!(names, ["Twitter", "Instagram", "LinkedIn", "GitHub"]);
    }
}

//! Static owner profile: hero copy and the "About Me" page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub bio: &'static str,
    pub links: &'static [SocialLink],
    pub technologies_heading: &'static str,
    pub learn_more: &'static str,
    pub about_title: &'static str,
    pub about: &'static [AboutSection],
    pub call_to_action: &'static str,
    pub call_to_action_link: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Vera Fileyeva",
    headline: "Junior Web Developer",
    bio: "Full Stack Developer with a software engineering background, a fresh \
          Ironhack bootcamp graduate, and a yoga teacher's mindset, combining \
          structure and creativity, logic and empathy to build thoughtful, \
          user-focused applications.",
    links: &[
        SocialLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/veramei-webdeveloper/",
        },
        SocialLink {
            label: "GitHub",
            url: "https://github.com/VeraV",
        },
    ],
    technologies_heading: "Technologies I Work With",
    learn_more: "Learn More About Me",
    about_title: "About Me",
    about: &[
        AboutSection {
            heading: "Hello! I'm Vera",
            paragraphs: &[
                "I'm a passionate Junior Web Developer with a strong foundation in \
                 modern web technologies. My journey into web development started \
                 when I discovered the power of creating interactive and meaningful \
                 digital experiences.",
                "I love turning complex problems into simple, beautiful, and \
                 intuitive solutions. Whether it's building responsive user \
                 interfaces or developing robust backend systems, I approach every \
                 project with enthusiasm and attention to detail.",
            ],
            items: &[],
        },
        AboutSection {
            heading: "My Journey",
            paragraphs: &[
                "After completing an intensive web development bootcamp, I've been \
                 continuously expanding my skills through personal projects and \
                 staying up-to-date with the latest industry trends. I believe in \
                 learning by doing and constantly challenging myself with new \
                 technologies.",
            ],
            items: &[],
        },
        AboutSection {
            heading: "Skills & Expertise",
            paragraphs: &[],
            items: &[
                "Frontend Development: React, HTML5, CSS3, Tailwind CSS",
                "Backend Development: Node.js, Express, RESTful APIs",
                "Database Management: PostgreSQL, MongoDB, Prisma ORM",
                "Version Control: Git & GitHub",
                "Agile methodologies and collaborative development",
            ],
        },
        AboutSection {
            heading: "What Drives Me",
            paragraphs: &[
                "I'm passionate about creating accessible, user-friendly applications \
                 that make a real difference. Clean code, best practices, and \
                 continuous learning are at the core of my development philosophy. \
                 I'm always excited to collaborate with other developers and \
                 contribute to innovative projects.",
            ],
            items: &[],
        },
    ],
    call_to_action: "Want to see what I've built? Check out my projects!",
    call_to_action_link: "View My Work",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_links() {
        let labels: Vec<&str> = PROFILE.links.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["LinkedIn", "GitHub"]);
        assert!(PROFILE.links.iter().all(|l| l.url.starts_with("https://")));
    }

    #[test]
    fn test_about_sections() {
        let headings: Vec<&str> = PROFILE.about.iter().map(|s| s.heading).collect();
        assert_eq!(
            headings,
            vec!["Hello! I'm Vera", "My Journey", "Skills & Expertise", "What Drives Me"]
        );
        assert_eq!(PROFILE.about[2].items.len(), 5);
    }
}

//! Literal page content.

use folio_tui::core::text::style::Color;

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub struct Principle {
    pub title: &'static str,
    pub description: &'static str,
    pub color: Color,
}

pub struct Skill {
    pub name: &'static str,
    /// Percent, `0..=100`.
    pub level: u8,
    pub description: &'static str,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub color: Color,
    pub skills: &'static [Skill],
}

pub struct Certification {
    pub title: &'static str,
    pub color: Color,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub repository: &'static str,
    pub technologies: &'static [&'static str],
    pub impact: &'static str,
    pub stars: u32,
    pub views: u32,
    pub color: Color,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub relationship: &'static str,
    pub date: &'static str,
    pub content: &'static str,
    pub highlights: &'static [&'static str],
}

pub struct Position {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub color: Color,
}

pub const HERO_PROMPT: &str = "pradeep@devops-elite:~$";
pub const HERO_STATUS: [&str; 3] = [
    "✓ Profile loaded successfully",
    "✓ Infrastructure orchestration: READY",
    "✓ Automation pipeline: ACTIVE",
];
pub const HERO_TAGLINE: [&str; 2] = [
    "\"Transforming Infrastructure Chaos",
    "into Automated Symphony\"",
];
pub const HERO_BUTTONS: [&str; 2] = ["View Infrastructure", "Download Resume"];
pub const HERO_STATS: [Stat; 3] = [
    Stat {
        value: "500+",
        label: "Microservices Deployed",
        color: Color::Green,
    },
    Stat {
        value: "$1.2M",
        label: "Annual Cost Savings",
        color: Color::Blue,
    },
    Stat {
        value: "99.9%",
        label: "Uptime Achieved",
        color: Color::Purple,
    },
];

pub const PRINCIPLES: [Principle; 3] = [
    Principle {
        title: "Infrastructure as Poetry",
        description: "Every line of code should be elegant, purposeful, and self-documenting",
        color: Color::Green,
    },
    Principle {
        title: "Security as Default",
        description:
            "Security isn't an afterthought, it's the foundation of everything we build",
        color: Color::Blue,
    },
    Principle {
        title: "Failure as Fuel",
        description: "Every failure is a learning opportunity that strengthens our resilience",
        color: Color::Purple,
    },
];

pub const PIPELINE_STAGES: [&str; 5] = [
    "Source Code Push",
    "Automated Testing",
    "Security Scanning",
    "Container Build",
    "Production Deploy",
];

pub const SKILL_CATEGORIES: [SkillCategory; 8] = [
    SkillCategory {
        title: "Cloud Platforms",
        color: Color::Blue,
        skills: &[
            Skill { name: "AWS", level: 95, description: "Expert" },
            Skill { name: "EC2 & S3", level: 90, description: "Professional" },
            Skill { name: "Cloud Cost Optimization", level: 85, description: "Professional" },
        ],
    },
    SkillCategory {
        title: "Orchestration & Containerization",
        color: Color::Green,
        skills: &[
            Skill { name: "Kubernetes", level: 90, description: "Professional" },
            Skill { name: "Docker", level: 95, description: "Expert" },
            Skill { name: "Container Orchestration", level: 85, description: "Professional" },
        ],
    },
    SkillCategory {
        title: "Infrastructure as Code",
        color: Color::Purple,
        skills: &[
            Skill { name: "Terraform", level: 90, description: "Professional" },
            Skill { name: "YAML Configurations", level: 95, description: "Expert" },
            Skill { name: "Infrastructure Automation", level: 90, description: "Professional" },
        ],
    },
    SkillCategory {
        title: "CI/CD & Version Control",
        color: Color::Cyan,
        skills: &[
            Skill { name: "Jenkins", level: 95, description: "Expert" },
            Skill { name: "GitHub Actions", level: 90, description: "Professional" },
            Skill { name: "ArgoCD", level: 85, description: "Professional" },
        ],
    },
    SkillCategory {
        title: "Monitoring & Observability",
        color: Color::Orange,
        skills: &[
            Skill { name: "Prometheus", level: 95, description: "Expert" },
            Skill { name: "Grafana", level: 95, description: "Expert" },
            Skill { name: "ELK Stack", level: 80, description: "Professional" },
        ],
    },
    SkillCategory {
        title: "Security & Quality",
        color: Color::Red,
        skills: &[
            Skill { name: "SonarQube", level: 85, description: "Professional" },
            Skill { name: "Trivy Security Scanning", level: 80, description: "Professional" },
            Skill { name: "ADA Compliance", level: 90, description: "Professional" },
        ],
    },
    SkillCategory {
        title: "Frontend Development",
        color: Color::Pink,
        skills: &[
            Skill { name: "HTML5 & CSS3", level: 95, description: "Expert" },
            Skill { name: "JavaScript & React", level: 90, description: "Professional" },
            Skill { name: "Bootstrap & Responsive Design", level: 95, description: "Expert" },
        ],
    },
    SkillCategory {
        title: "Automation & Scripting",
        color: Color::Yellow,
        skills: &[
            Skill { name: "AutoHotkey v1/v2", level: 95, description: "Expert" },
            Skill { name: "Python Scripting", level: 85, description: "Professional" },
            Skill { name: "Bash Scripting", level: 80, description: "Professional" },
        ],
    },
];

pub const CERTIFICATIONS: [Certification; 3] = [
    Certification {
        title: "Certified Kubernetes Application Developer (CKAD)",
        color: Color::Green,
    },
    Certification {
        title: "Advance DevOps - Zero To Hero",
        color: Color::Blue,
    },
    Certification {
        title: "DevSecOps - Kubernetes DevOps & Security",
        color: Color::Purple,
    },
];

pub const ARSENAL_STATS: [Stat; 4] = [
    Stat { value: "5+", label: "Years Experience", color: Color::Green },
    Stat { value: "25+", label: "Automation Scripts", color: Color::Blue },
    Stat { value: "135+", label: "Landing Pages", color: Color::Purple },
    Stat { value: "1000+", label: "Hours Saved", color: Color::Cyan },
];

pub const PROJECTS: [Project; 6] = [
    Project {
        title: "Kubernetes Autoscaler Optimization",
        description: "Advanced predictive scaling system that reduced cluster costs by 40% while maintaining 99.9% uptime",
        repository: "saineox/k8s-autoscaler",
        technologies: &["Kubernetes", "Go", "Prometheus", "Grafana"],
        impact: "40% cost reduction",
        stars: 245,
        views: 1200,
        color: Color::Green,
    },
    Project {
        title: "Terraform Multi-Cloud Framework",
        description: "Unified infrastructure framework supporting AWS, Azure, and GCP with automated compliance checking",
        repository: "saineox/terraform-multicloud",
        technologies: &["Terraform", "Python", "AWS", "Azure", "GCP"],
        impact: "$1.2M annual savings",
        stars: 189,
        views: 890,
        color: Color::Blue,
    },
    Project {
        title: "GitOps Pipeline with ArgoCD",
        description: "Complete GitOps implementation with automated deployments, rollbacks, and progressive delivery",
        repository: "saineox/gitops-argocd",
        technologies: &["ArgoCD", "Kubernetes", "Helm", "Kustomize"],
        impact: "Zero-downtime deployments",
        stars: 167,
        views: 750,
        color: Color::Purple,
    },
    Project {
        title: "Infrastructure Security Scanner",
        description: "Automated security scanning tool that integrates with CI/CD pipelines for continuous compliance",
        repository: "saineox/infra-security-scanner",
        technologies: &["Python", "Docker", "Terraform", "YAML"],
        impact: "100% compliance rate",
        stars: 134,
        views: 620,
        color: Color::Red,
    },
    Project {
        title: "Microservices Monitoring Stack",
        description: "Complete observability solution with distributed tracing, metrics, and log aggregation",
        repository: "saineox/microservices-monitoring",
        technologies: &["Prometheus", "Jaeger", "ELK", "Kubernetes"],
        impact: "50% faster troubleshooting",
        stars: 98,
        views: 430,
        color: Color::Orange,
    },
    Project {
        title: "Cloud Cost Optimization Engine",
        description: "Machine learning-powered tool for optimizing cloud resource allocation and cost management",
        repository: "saineox/cloud-cost-optimizer",
        technologies: &["Python", "ML", "AWS", "Terraform"],
        impact: "30% cost optimization",
        stars: 156,
        views: 680,
        color: Color::Cyan,
    },
];

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Mari Pool",
        role: "Team Lead, Web Developer",
        company: "Blackbaud",
        relationship: "Worked on the same team",
        date: "May 2025",
        content: "Pradeep is consistently reliable and technically strong in a variety of areas. He picks up new technologies quickly and contributes effectively without needing much ramp-up time. He's dependable, smart, and easy to work with, a solid team member who delivers.",
        highlights: &["Technically Strong", "Quick Learner", "Reliable", "Team Player"],
    },
    Testimonial {
        name: "Corwin Bermudez",
        role: "Front-End Web Designer and Developer",
        company: "Former Colleague",
        relationship: "Worked on the same team",
        date: "May 2025",
        content: "As Pradeep's former colleague my whole team and I leaned on his ability to navigate complex workflows to meet customer needs quickly. His front-end scripting and data language experience makes him a valuable asset for supplementing customer-facing apps with customizable content and experiences. Pradeep worked quickly to learn techniques and languages we did not know, and elevated our team's processes consistently during his tenure.",
        highlights: &["Complex Workflows", "Customer-Focused", "Process Improvement", "Quick Learner"],
    },
    Testimonial {
        name: "Derek Iwanowski",
        role: "Senior Consultant",
        company: "EVERFI",
        relationship: "Worked on the same team",
        date: "May 2025",
        content: "I highly recommend Pradeep as he is a very strong and dedicated worker who collaborates well with others. Pradeep is reliable and has a lot of technical knowledge. I believe he would be an asset to any team.",
        highlights: &["Dedicated", "Technical Knowledge", "Collaborative", "Asset to Team"],
    },
    Testimonial {
        name: "Sunil Ajagekar",
        role: "Full Stack Developer",
        company: "Citi | Ex-Disney",
        relationship: "Academic & Professional Connection",
        date: "March 2024",
        content: "I highly recommend Pradeep for his exceptional development and DevOps skills. Having known him closely throughout our academic journey, I've witnessed his dedication and proficiency in tackling complex technical challenges. Pradeep's combination of strong academic background and hands-on expertise makes him a valuable asset to any team.",
        highlights: &["DevOps Excellence", "Complex Problem Solving", "Academic Excellence", "Hands-on Expertise"],
    },
    Testimonial {
        name: "Nalini Sagar",
        role: "Senior Recruiter & Job Coach",
        company: "v-shesh",
        relationship: "Mentor",
        date: "May 2025",
        content: "Pradeep is one of our Codestar trainee, during the training period, he really performed well. he did a great job in his team project. good luck pradeep for your future endeavors.",
        highlights: &["Top Performer", "Team Project Excellence", "Training Success", "Mentorship"],
    },
    Testimonial {
        name: "Abhijit Patil",
        role: "Business Analytics Specialist",
        company: "Strategic Insights Professional",
        relationship: "Professional Network",
        date: "February 2024",
        content: "I have no doubt that Pradeep's transition into a DevOps Engineer role will be met with the same level of enthusiasm and proficiency that he brought to the Organization. He has all the qualities necessary to excel in this new endeavor, and I wholeheartedly recommend him for any future opportunities.",
        highlights: &["Career Transition", "Enthusiasm", "Proficiency", "Future Potential"],
    },
];

pub const POSITIONS: [Position; 3] = [
    Position {
        title: "DevOps Engineer & Senior UI/UX Developer",
        company: "TechExped Technology Services Pvt Ltd | Everfi from Blackbaud.inc",
        duration: "April 2022 - Present",
        location: "Washington, United States",
        achievements: &[
            "Designed multi-stage CI/CD pipelines with GitHub, Jenkins, SonarQube, reducing manual errors by 30%",
            "Implemented scalable cloud infrastructure using Terraform, cutting monthly costs by 10%",
            "Dockerized applications and orchestrated K8s deployments, reducing deployment times by 25%",
            "Established monitoring with Prometheus/Grafana, reducing incident response times by 35%",
            "Delivered 100+ responsive web templates from Figma designs, improving turnaround by 30%",
            "Spearheaded ADA compliance initiatives for 15+ client websites achieving 100% accessibility",
        ],
        technologies: &[
            "AWS", "Docker", "Kubernetes", "Jenkins", "Terraform", "Prometheus", "Grafana", "HTML5",
            "CSS3", "React",
        ],
        color: Color::Green,
    },
    Position {
        title: "Online Content Moderator",
        company: "Accenture in India",
        duration: "February 2022 - May 2022",
        location: "Mumbai, Maharashtra, India",
        achievements: &[
            "Moderated 500+ daily social media posts with 99.9% compliance accuracy",
            "Flagged and resolved 1,200+ policy violations within SLA deadlines",
            "Automated repetitive tasks using AutoHotkey macros, reducing review time by 20%",
            "Collaborated on UI improvements for internal moderation tools",
        ],
        technologies: &["AutoHotkey", "Content Moderation", "Process Automation", "UI/UX"],
        color: Color::Blue,
    },
    Position {
        title: "Trader | Trainer | Associate Partner",
        company: "Profitmart Securities Pvt. Ltd.",
        duration: "June 2018 - February 2022",
        location: "Kolhapur, Maharashtra, India",
        achievements: &[
            "Developed 20+ AutoHotkey v1 scripts for trade automation, boosting profits by 18%+ monthly",
            "Integrated utilities with AWS EC2, saving 50% of cloud runtime costs annually",
            "Designed front-end interfaces using HTML5, CSS3, Bootstrap for real-time trading data",
            "Streamlined REST API integrations improving data flow between algorithms and UI dashboards",
        ],
        technologies: &["AutoHotkey", "AWS EC2", "HTML5", "CSS3", "Bootstrap", "REST APIs"],
        color: Color::Purple,
    },
];

pub const FOOTER_COPYRIGHT: &str =
    "© 2024 Pradeep Traje. Transforming infrastructure, one deployment at a time.";
pub const FOOTER_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Site Map"];
pub const FOOTER_PROMPT: &str = "system@status:~$";
pub const FOOTER_STATUS: &str = "Infrastructure: OPERATIONAL";

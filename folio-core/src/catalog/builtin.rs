//! Content the site ships with when no catalog file is configured.

use chrono::NaiveDate;
use folio_model::{
    BlogPost, BookingOptions, ClipLength, ContentId, Proficiency, Profile, Project, ProjectId,
    ProjectLinks, ReadTime, SkillDetail, SkillIcon, SkillProject, SkillSlug, SkillSummary,
    SocialLink, SocialPlatform, Video, ViewCount,
};

use super::{CatalogParts, DEFAULT_SKILL};

const GITHUB: &str = "https://github.com";
const DEMO: &str = "https://demo.com";
const HASHNODE: &str = "https://hashnode.com";
const YOUTUBE: &str = "https://youtube.com";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn pexels(photo: u32, width: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w={width}"
    )
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(super) fn parts() -> CatalogParts {
    CatalogParts {
        profile: profile(),
        skills: skills(),
        skill_details: vec![aws_detail()],
        default_skill: SkillSlug::from_name(DEFAULT_SKILL),
        projects: projects(),
        videos: videos(),
        blogs: blogs(),
        social_links: social_links(),
        booking: booking(),
    }
}

fn profile() -> Profile {
    Profile {
        name: "Alex Thompson".into(),
        headline: "DevOps Engineer".into(),
        avatar_url: pexels(2379004, 400),
        badges: strings(&["AWS Certified", "5+ Years", "Kubernetes Expert"]),
        bio: strings(&[
            "Passionate DevOps engineer with 5+ years of experience building scalable infrastructure and automating deployments. I bridge the gap between development and operations, creating robust CI/CD pipelines and cloud-native solutions.",
            "Specialized in AWS, Kubernetes, and Infrastructure as Code. Always exploring the latest technologies to optimize performance and reduce operational overhead.",
        ]),
        resume_url: None,
    }
}

fn skills() -> Vec<SkillSummary> {
    let skill = |name: &str, icon, description: &str, project_count| SkillSummary {
        name: name.into(),
        description: description.into(),
        icon,
        project_count,
    };
    vec![
        skill("AWS", SkillIcon::Cloud, "Cloud infrastructure and services", 12),
        skill("Linux", SkillIcon::Terminal, "System administration and automation", 25),
        skill("Jenkins", SkillIcon::Settings, "CI/CD pipeline automation", 18),
        skill("Kubernetes", SkillIcon::Container, "Container orchestration", 15),
        skill("Python", SkillIcon::Code, "Automation and scripting", 30),
        skill("Java", SkillIcon::Coffee, "Enterprise applications", 8),
        skill("SQL", SkillIcon::Database, "Database management", 20),
    ]
}

fn project(
    id: u32,
    title: &str,
    description: &str,
    photo: u32,
    tags: &[&str],
    (stars, forks): (u32, u32),
    featured: bool,
) -> Project {
    Project {
        id: ProjectId::new(id),
        title: title.into(),
        description: description.into(),
        image_url: pexels(photo, 600),
        tags: strings(tags),
        links: ProjectLinks {
            github: Some(GITHUB.into()),
            demo: Some(DEMO.into()),
            blog: Some(HASHNODE.into()),
        },
        stars,
        forks,
        featured,
    }
}

fn projects() -> Vec<Project> {
    vec![
        project(
            1,
            "Kubernetes Multi-Cloud Deployment",
            "Automated deployment pipeline for applications across multiple cloud providers using Terraform and Kubernetes.",
            3861969,
            &["Kubernetes", "Terraform", "AWS", "GCP"],
            (124, 32),
            true,
        ),
        project(
            2,
            "CI/CD Pipeline with Jenkins & Docker",
            "Complete CI/CD solution with automated testing, building, and deployment using Jenkins, Docker, and AWS ECS.",
            2004161,
            &["Jenkins", "Docker", "AWS ECS", "Python"],
            (89, 21),
            true,
        ),
        project(
            3,
            "Infrastructure as Code Template",
            "Comprehensive Terraform modules for AWS infrastructure provisioning with best practices and security configurations.",
            1181298,
            &["Terraform", "AWS", "Security", "IaC"],
            (203, 67),
            false,
        ),
        project(
            4,
            "Monitoring Stack with Prometheus",
            "Complete monitoring solution using Prometheus, Grafana, and AlertManager for Kubernetes clusters.",
            1181677,
            &["Prometheus", "Grafana", "Kubernetes", "Monitoring"],
            (156, 43),
            false,
        ),
        project(
            5,
            "Serverless Log Processing",
            "AWS Lambda-based log processing pipeline with real-time analytics and alerting capabilities.",
            1181244,
            &["AWS Lambda", "Serverless", "Python", "Analytics"],
            (78, 19),
            false,
        ),
        project(
            6,
            "GitOps Workflow with ArgoCD",
            "GitOps implementation using ArgoCD for continuous deployment with automatic rollbacks and configuration management.",
            1194713,
            &["ArgoCD", "GitOps", "Kubernetes", "Helm"],
            (145, 38),
            true,
        ),
    ]
}

fn videos() -> Vec<Video> {
    vec![
        Video {
            id: ContentId::new(1),
            title: "Kubernetes Security Best Practices".into(),
            description: "Learn how to secure your Kubernetes clusters with RBAC, network policies, and security contexts.".into(),
            thumbnail_url: pexels(1181298, 400),
            length: ClipLength::from_seconds(15 * 60 + 32),
            views: ViewCount::new(2_300),
            published_at: date(2024, 1, 15),
            url: YOUTUBE.into(),
        },
        eks_video(
            "Complete guide to setting up Amazon EKS cluster using Terraform with all the necessary configurations.",
        ),
        Video {
            id: ContentId::new(3),
            title: "CI/CD Pipeline with GitHub Actions".into(),
            description: "Build automated deployment pipelines using GitHub Actions for containerized applications.".into(),
            thumbnail_url: pexels(2004161, 400),
            length: ClipLength::from_seconds(18 * 60 + 21),
            views: ViewCount::new(3_700),
            published_at: date(2024, 1, 5),
            url: YOUTUBE.into(),
        },
    ]
}

fn eks_video(description: &str) -> Video {
    Video {
        id: ContentId::new(2),
        title: "AWS EKS Setup with Terraform".into(),
        description: description.into(),
        thumbnail_url: pexels(1181677, 400),
        length: ClipLength::from_seconds(22 * 60 + 45),
        views: ViewCount::new(4_100),
        published_at: date(2024, 1, 10),
        url: YOUTUBE.into(),
    }
}

fn blogs() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: ContentId::new(1),
            title: "Mastering Docker Multi-Stage Builds".into(),
            description: "Optimize your Docker images and reduce build times with multi-stage builds. Learn advanced techniques for production-ready containers.".into(),
            cover_image_url: pexels(1181244, 400),
            published_at: date(2024, 1, 20),
            read_time: ReadTime::minutes(8),
            views: ViewCount::new(1_200),
            url: HASHNODE.into(),
        },
        BlogPost {
            id: ContentId::new(2),
            title: "Infrastructure as Code: Terraform vs Pulumi".into(),
            description: "Comprehensive comparison of Terraform and Pulumi for infrastructure automation. Which one should you choose?".into(),
            cover_image_url: pexels(1194713, 400),
            published_at: date(2024, 1, 18),
            read_time: ReadTime::minutes(12),
            views: ViewCount::new(2_800),
            url: HASHNODE.into(),
        },
        BlogPost {
            id: ContentId::new(3),
            title: "Monitoring Microservices with Prometheus".into(),
            description: "Set up comprehensive monitoring for your microservices architecture using Prometheus, Grafana, and AlertManager.".into(),
            cover_image_url: pexels(3861969, 400),
            published_at: date(2024, 1, 15),
            read_time: ReadTime::minutes(10),
            views: ViewCount::new(3_400),
            url: HASHNODE.into(),
        },
    ]
}

fn aws_detail() -> SkillDetail {
    SkillDetail {
        slug: SkillSlug::from_name("aws"),
        name: "AWS (Amazon Web Services)".into(),
        description: "Comprehensive cloud computing platform offering 200+ services for computing, storage, databases, networking, analytics, and more.".into(),
        level: Proficiency::Expert,
        experience: "5+ years".into(),
        certifications: strings(&[
            "AWS Solutions Architect Professional",
            "AWS DevOps Engineer Professional",
        ]),
        projects: vec![
            SkillProject {
                id: ProjectId::new(1),
                title: "Multi-Region EKS Deployment".into(),
                description: "Deployed scalable Kubernetes clusters across multiple AWS regions with auto-scaling and disaster recovery.".into(),
                technologies: strings(&["EKS", "ALB", "Route53", "RDS", "ElastiCache"]),
                github: Some(GITHUB.into()),
                demo: Some(DEMO.into()),
            },
            SkillProject {
                id: ProjectId::new(2),
                title: "Serverless Data Pipeline".into(),
                description: "Built real-time data processing pipeline using Lambda, Kinesis, and DynamoDB for IoT data ingestion.".into(),
                technologies: strings(&["Lambda", "Kinesis", "DynamoDB", "S3", "CloudWatch"]),
                github: Some(GITHUB.into()),
                demo: Some(DEMO.into()),
            },
        ],
        videos: vec![eks_video(
            "Complete guide to setting up Amazon EKS cluster using Terraform",
        )],
        blogs: vec![BlogPost {
            id: ContentId::new(1),
            title: "AWS Cost Optimization Strategies".into(),
            description: "Learn how to reduce AWS costs by 40% using these proven strategies".into(),
            cover_image_url: String::new(),
            published_at: date(2024, 1, 15),
            read_time: ReadTime::minutes(8),
            views: ViewCount::new(2_300),
            url: HASHNODE.into(),
        }],
    }
}

fn social_links() -> Vec<SocialLink> {
    let link = |platform, url: &str| SocialLink {
        platform,
        url: url.into(),
    };
    vec![
        link(SocialPlatform::Email, ""),
        link(SocialPlatform::GitHub, GITHUB),
        link(SocialPlatform::LinkedIn, "https://linkedin.com"),
        link(SocialPlatform::YouTube, YOUTUBE),
        link(SocialPlatform::Hashnode, HASHNODE),
    ]
}

fn booking() -> BookingOptions {
    BookingOptions {
        purposes: strings(&[
            "DevOps Consultation",
            "Infrastructure Review",
            "CI/CD Pipeline Setup",
            "Kubernetes Training",
            "Cloud Migration Planning",
            "Security Assessment",
            "Career Mentoring",
            "Technical Interview Prep",
        ]),
        time_windows: strings(&[
            "Morning (9:00 AM - 12:00 PM)",
            "Afternoon (1:00 PM - 5:00 PM)",
            "Evening (6:00 PM - 8:00 PM)",
            "Weekend (Flexible)",
        ]),
    }
}

use folio::{
    Certification, ContactInfo, Education, Project, ResumeData, SkillCategory, WorkExperience,
};

pub fn contact() -> ContactInfo {
    ContactInfo {
        email: Some("jane@example.com".into()),
        phone: Some("+1 555 010 2000".into()),
        location: Some("Berlin, Germany".into()),
        linkedin: Some("linkedin.com/in/janedoe".into()),
        github: Some("github.com/janedoe".into()),
    }
}

pub fn skills(category: &str, list: &[&str]) -> SkillCategory {
    SkillCategory {
        category: category.into(),
        list: list.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn work(role: &str, company: &str, year: &str, bullets: &[&str]) -> WorkExperience {
    WorkExperience {
        role: role.into(),
        company: company.into(),
        year: year.into(),
        location: None,
        bullets: bullets.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn education(degree: &str, school: &str, year: &str) -> Education {
    Education {
        degree: degree.into(),
        school: school.into(),
        year: year.into(),
        ..Default::default()
    }
}

/// Experienced engineer: one role with three bullets, no projects and no
/// certifications.
pub fn experienced_resume() -> ResumeData {
    ResumeData {
        name: "Jane Doe".into(),
        contact: contact(),
        target_role: Some("Senior Engineer".into()),
        summary: Some(
            "Backend engineer with eight years building payment systems and developer tooling."
                .into(),
        ),
        work_experience: vec![work(
            "Senior Engineer",
            "Acme Corp",
            "2019 - Present",
            &[
                "Led the migration of the billing platform to an event-driven design.",
                "Cut p99 checkout latency by 40% through query and cache tuning.",
                "Mentored four engineers and ran the on-call rotation.",
            ],
        )],
        education: vec![education("B.Sc. Computer Science", "TU Berlin", "2015")],
        skills: vec![
            skills("Languages", &["Python", "Go", "Rust"]),
            skills("Infrastructure", &["Kubernetes", "Terraform", "AWS"]),
        ],
        ..Default::default()
    }
}

/// Student with both an objective and a summary filled in.
pub fn student_resume() -> ResumeData {
    ResumeData {
        name: "Sam Lee".into(),
        contact: ContactInfo {
            email: Some("sam@example.edu".into()),
            ..Default::default()
        },
        summary: Some("Seasoned professional summary that must not appear.".into()),
        career_objective: Some("Aspiring systems programmer seeking an internship.".into()),
        education: vec![Education {
            cgpa: Some("3.8/4.0".into()),
            relevant_coursework: vec!["Operating Systems".into(), "Compilers".into()],
            ..education("B.Tech Computer Science", "State University", "2026")
        }],
        projects: vec![Project {
            title: "Toy Compiler".into(),
            bullets: vec!["Wrote a compiler for a subset of C.".into()],
            github_url: Some("github.com/samlee/toycc".into()),
        }],
        skills: vec![skills("Languages", &["C", "Rust"])],
        ..Default::default()
    }
}

/// Every section populated, enough to exercise every renderer.
pub fn full_resume() -> ResumeData {
    let mut data = experienced_resume();
    data.work_experience.push(work(
        "Software Engineer",
        "Globex",
        "2015 - 2019",
        &["Built the internal deployment pipeline.", "Owned the public API."],
    ));
    data.projects = vec![Project {
        title: "Open-source queue".into(),
        bullets: vec!["Durable job queue on Postgres.".into()],
        github_url: Some("https://github.com/janedoe/queue".into()),
    }];
    data.certifications = vec![
        Certification::Structured {
            title: Some("AWS".into()),
            description: Some("Cloud cert".into()),
            issuer: None,
            name: None,
        },
        Certification::Plain("Certified Kubernetes Administrator".into()),
    ];
    data.achievements = vec!["Speaker at a regional Go conference.".into()];
    data
}

/// Enough experience entries to run well past one page.
pub fn long_resume() -> ResumeData {
    let mut data = experienced_resume();
    data.work_experience = (0..14)
        .map(|i| {
            work(
                &format!("Engineer {}", i + 1),
                "Initech",
                "2010 - 2011",
                &[
                    "Designed and shipped a service handling millions of requests per day with careful capacity planning.",
                    "Worked closely with product and design to scope, estimate and deliver features on schedule.",
                    "Improved test coverage and reliability across the codebase.",
                ],
            )
        })
        .collect();
    data
}

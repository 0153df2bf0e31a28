//! The fixed demo dataset loaded by a reseed.

use crate::models::catalog::{Difficulty, Level, Platform};

/// A branch to insert, together with the records it owns.
#[derive(Debug, Clone)]
pub struct NewBranch {
    pub name: String,
    pub code: String,
    pub description: String,
    pub placement_2024: i32,
    pub placement_2026: i32,
    pub salary_2024: f64,
    pub future_trends: String,
    pub future_skills: String,
    pub icon: String,
    pub companies: Vec<String>,
    pub courses: Vec<NewCourse>,
    pub projects: Vec<NewProject>,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub platform: Platform,
    pub level: Level,
    pub duration: String,
    pub is_free: bool,
    pub free_details: String,
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub difficulty: Difficulty,
}

/// Classifies a project idea by keywords in its title.
pub fn classify_difficulty(project_name: &str) -> Difficulty {
    if project_name.contains("AI") || project_name.contains("Rocket") {
        Difficulty::Hard
    } else if project_name.contains("Weather") || project_name.contains("Website") {
        Difficulty::Easy
    } else {
        Difficulty::Medium
    }
}

struct BranchRow {
    name: &'static str,
    code: &'static str,
    placement_2024: i32,
    placement_2026: i32,
    salary_2024: f64,
    future_trends: &'static str,
    future_skills: &'static str,
    icon: &'static str,
    companies: &'static [&'static str],
    courses: &'static [(Platform, &'static str, Level, &'static str, bool)],
    projects: &'static [&'static str],
}

const DEMO_BRANCHES: &[BranchRow] = &[
    BranchRow {
        name: "Computer Science",
        code: "CS",
        placement_2024: 88,
        placement_2026: 91,
        salary_2024: 9.2,
        future_trends: "AI jobs will grow by 40%, Cybersecurity demand increasing, Cloud computing expansion",
        future_skills: "AI/ML, Cloud Computing, Cybersecurity, Data Science, Full Stack Development",
        icon: "💻",
        companies: &["Google", "Microsoft", "Amazon", "Infosys", "TCS", "Wipro", "Facebook", "Apple"],
        courses: &[
            (Platform::Nptel, "Programming in Java", Level::Intermediate, "12 weeks", true),
            (Platform::Coursera, "Machine Learning by Andrew Ng", Level::Beginner, "11 weeks", false),
            (Platform::EdX, "CS50's Introduction to CS", Level::Beginner, "12 weeks", true),
            (Platform::Udemy, "Web Development Bootcamp", Level::Beginner, "55 hours", false),
            (Platform::Nptel, "Data Structures and Algorithms", Level::Intermediate, "8 weeks", true),
        ],
        projects: &[
            "AI Chatbot using Python and NLP",
            "E-commerce Website with React",
            "Mobile App with Flutter",
            "Stock Price Prediction Model",
            "Blockchain-based Voting System",
            "Cybersecurity Threat Detection",
        ],
    },
    BranchRow {
        name: "Mechanical",
        code: "ME",
        placement_2024: 72,
        placement_2026: 75,
        salary_2024: 6.5,
        future_trends: "EV sector boom, Robotics automation expanding, Additive manufacturing growth",
        future_skills: "CAD/CAM, Robotics, EV Technology, 3D Printing, Thermodynamics",
        icon: "🚗",
        companies: &["TATA Motors", "Mahindra", "L&T", "Maruti Suzuki", "John Deere", "BHEL", "Siemens"],
        courses: &[
            (Platform::Nptel, "Introduction to Electric Vehicles", Level::Beginner, "8 weeks", true),
            (Platform::Coursera, "Robotics Specialization", Level::Intermediate, "7 months", false),
            (Platform::EdX, "CAD and Digital Manufacturing", Level::Intermediate, "9 weeks", true),
            (Platform::Nptel, "Automobile Engineering", Level::Advanced, "12 weeks", true),
        ],
        projects: &[
            "Electric Vehicle Conversion Kit",
            "3D Printed Prosthetic Hand",
            "Automated Solar Panel Cleaner",
            "RC Aircraft with FPV System",
            "Hydraulic Robotic Arm",
            "Smart Irrigation System",
        ],
    },
    BranchRow {
        name: "Civil",
        code: "CE",
        placement_2024: 68,
        placement_2026: 70,
        salary_2024: 5.9,
        future_trends: "Infrastructure projects under National Pipeline, Smart cities, Green building",
        future_skills: "BIM, Project Management, Sustainable Materials, Structural Analysis",
        icon: "🏗️",
        companies: &["L&T Construction", "Shapoorji Pallonji", "TATA Projects", "GMR Group", "DLF", "Prestige"],
        courses: &[
            (Platform::Nptel, "Building Information Modeling", Level::Intermediate, "8 weeks", true),
            (Platform::Coursera, "Construction Management", Level::Beginner, "6 months", false),
            (Platform::EdX, "Sustainable Building Design", Level::Intermediate, "10 weeks", true),
        ],
        projects: &[
            "BIM Model for Smart Building",
            "Earthquake Resistant Design",
            "Green Building with Sustainable Materials",
            "Traffic Management System",
            "Bridge Health Monitoring",
            "Water Treatment Plant Design",
        ],
    },
    BranchRow {
        name: "Electronics",
        code: "EC",
        placement_2024: 79,
        placement_2026: 82,
        salary_2024: 7.8,
        future_trends: "Semiconductor industry growth, IoT devices expansion, 5G implementation",
        future_skills: "VLSI, Embedded Systems, IoT, PCB Design, Communication Systems",
        icon: "📱",
        companies: &["Intel", "Samsung", "Qualcomm", "Texas Instruments", "NVIDIA", "AMD", "Broadcom"],
        courses: &[
            (Platform::Nptel, "VLSI Design", Level::Advanced, "12 weeks", true),
            (Platform::Coursera, "IoT Programming", Level::Intermediate, "7 weeks", false),
            (Platform::EdX, "Embedded Systems", Level::Beginner, "8 weeks", true),
        ],
        projects: &[
            "IoT Home Automation System",
            "Arduino Weather Station",
            "PCB Design for Power Supply",
            "Drone with GPS Navigation",
            "Digital Oscilloscope",
            "Smart Energy Meter",
        ],
    },
    BranchRow {
        name: "Chemical",
        code: "CH",
        placement_2024: 71,
        placement_2026: 74,
        salary_2024: 6.8,
        future_trends: "Green chemistry emerging, Pharmaceutical sector stable, Sustainable processes",
        future_skills: "Process Optimization, Green Chemistry, Data Analysis, Thermodynamics",
        icon: "⚗️",
        companies: &["Reliance", "BASF", "Dow Chemical", "Shell", "BPCL", "IOCL", "ONGC"],
        courses: &[
            (Platform::Nptel, "Process Integration", Level::Advanced, "8 weeks", true),
            (Platform::Coursera, "Introduction to Chemistry", Level::Beginner, "7 weeks", true),
            (Platform::EdX, "Sustainable Chemical Engineering", Level::Intermediate, "6 weeks", true),
        ],
        projects: &[
            "Biodiesel Production from Waste Oil",
            "Water Purification System",
            "Plastic Recycling Process",
            "Chemical Process Simulation",
            "Nanomaterial Synthesis",
            "Food Preservation Technology",
        ],
    },
    BranchRow {
        name: "Aerospace",
        code: "AE",
        placement_2024: 75,
        placement_2026: 78,
        salary_2024: 8.1,
        future_trends: "Space tech growing, Drone technology expanding, Commercial space flight",
        future_skills: "Aerodynamics, Composite Materials, Drone Tech, Propulsion Systems",
        icon: "✈️",
        companies: &["ISRO", "DRDO", "Boeing", "Airbus", "HAL", "SpaceX", "Blue Origin"],
        courses: &[
            (Platform::Nptel, "Aerodynamics", Level::Advanced, "12 weeks", true),
            (Platform::Coursera, "Flight Mechanics", Level::Intermediate, "8 weeks", false),
            (Platform::EdX, "Introduction to Aeronautical Engineering", Level::Beginner, "7 weeks", true),
        ],
        projects: &[
            "Quadcopter with Autonomous Navigation",
            "Rocket Propulsion System Design",
            "Aircraft Wing Design Optimization",
            "Satellite Communication System",
            "Drone-based Delivery System",
            "Aerodynamic Analysis",
        ],
    },
];

/// Builds the six-branch demo dataset in its canonical insertion order.
pub fn demo_dataset() -> Vec<NewBranch> {
    DEMO_BRANCHES
        .iter()
        .map(|row| NewBranch {
            name: row.name.to_string(),
            code: row.code.to_string(),
            description: String::new(),
            placement_2024: row.placement_2024,
            placement_2026: row.placement_2026,
            salary_2024: row.salary_2024,
            future_trends: row.future_trends.to_string(),
            future_skills: row.future_skills.to_string(),
            icon: row.icon.to_string(),
            companies: row.companies.iter().map(|c| c.to_string()).collect(),
            courses: row
                .courses
                .iter()
                .map(|&(platform, name, level, duration, is_free)| NewCourse {
                    name: name.to_string(),
                    platform,
                    level,
                    duration: duration.to_string(),
                    is_free,
                    free_details: String::new(),
                })
                .collect(),
            projects: row
                .projects
                .iter()
                .map(|name| NewProject {
                    name: name.to_string(),
                    difficulty: classify_difficulty(name),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_dataset_sizes() {
        let data = demo_dataset();
        assert_eq!(data.len(), 6);
        assert_eq!(data.iter().map(|b| b.companies.len()).sum::<usize>(), 42);
        assert_eq!(data.iter().map(|b| b.courses.len()).sum::<usize>(), 21);
        assert_eq!(data.iter().map(|b| b.projects.len()).sum::<usize>(), 36);
    }

    #[test]
    fn test_names_and_codes_are_unique() {
        let data = demo_dataset();
        let names: HashSet<_> = data.iter().map(|b| b.name.as_str()).collect();
        let codes: HashSet<_> = data.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(names.len(), data.len());
        assert_eq!(codes.len(), data.len());
    }

    #[test]
    fn test_company_names_unique_within_branch() {
        for branch in demo_dataset() {
            let unique: HashSet<_> = branch.companies.iter().collect();
            assert_eq!(unique.len(), branch.companies.len(), "{}", branch.name);
        }
    }

    #[test]
    fn test_classify_difficulty() {
        assert_eq!(classify_difficulty("AI Chatbot using Python and NLP"), Difficulty::Hard);
        assert_eq!(classify_difficulty("Rocket Propulsion System Design"), Difficulty::Hard);
        assert_eq!(classify_difficulty("Arduino Weather Station"), Difficulty::Easy);
        assert_eq!(classify_difficulty("E-commerce Website with React"), Difficulty::Easy);
        assert_eq!(classify_difficulty("Smart Energy Meter"), Difficulty::Medium);
        // "Aircraft" is not the "AI" keyword
        assert_eq!(classify_difficulty("Aircraft Wing Design Optimization"), Difficulty::Medium);
    }
}

//! Bootstrap documents written on first access to an empty medium.

use serde_json::Map;

use crate::{
  item::{Category, ContentType, Item},
  profile::Profile,
};

pub fn initial_profile() -> Profile {
  Profile {
    name:       "Hriday Gupta".into(),
    title:      "BTech CSE AIML Student & Creative Director".into(),
    university: "Sharda University".into(),
    degree:     "BTech CSE (Artificial Intelligence & Machine Learning)".into(),
    about:      "I am a 21-year-old explorer who loves to record everything. \
                 Bridging the gap between complex algorithms and visual \
                 storytelling. Passionate about AI, Video Editing, and Content \
                 Creation."
      .into(),
    skills:     strings(&[
      "Python",
      "TensorFlow",
      "React",
      "Video Editing",
      "Photography",
      "Adobe Premiere Pro",
      "Data Structures",
    ]),
    avatar_url: "/hriday.jpg".into(),
  }
}

/// The nine seeded items, academic first, in display order.
pub fn initial_items() -> Vec<Item> {
  vec![
    // Academic
    Item {
      id:           "1".into(),
      title:        "AI-Powered Traffic Analysis".into(),
      description:  "A computer vision project using YOLOv8 to detect and \
                     classify vehicles in real-time."
        .into(),
      category:     Category::Academic,
      content_type: ContentType::Project,
      media_url:    Some(unsplash("photo-1555421689-d68471e18963")),
      link_url:     Some("https://github.com".into()),
      tags:         Some(strings(&["Python", "OpenCV", "AI/ML"])),
      date:         None,
      author:       None,
      extra:        Map::new(),
    },
    Item {
      id:           "2".into(),
      title:        "Data Science Certification".into(),
      description:  "Advanced specialization in Data Science from Coursera.".into(),
      category:     Category::Academic,
      content_type: ContentType::Certification,
      media_url:    Some(unsplash("photo-1523580494863-6f3031224c94")),
      link_url:     None,
      tags:         Some(strings(&["Data Science", "Statistics"])),
      date:         Some("2023".into()),
      author:       None,
      extra:        Map::new(),
    },
    Item {
      id:           "a1".into(),
      title:        "Python Mastery".into(),
      description:  "Proficient in Python for Data Science and Backend \
                     Development."
        .into(),
      category:     Category::Academic,
      content_type: ContentType::Skill,
      media_url:    Some(unsplash("photo-1526379095098-d400fd0bf935")),
      link_url:     None,
      tags:         Some(strings(&["Programming"])),
      date:         None,
      author:       None,
      extra:        Map::new(),
    },
    Item {
      id:           "a2".into(),
      title:        "Dr. Alan Turing".into(),
      description:  "Mentored me during my thesis on Computational Logic.".into(),
      category:     Category::Academic,
      content_type: ContentType::Mentor,
      media_url:    Some(unsplash("photo-1531427186611-ecfd6d936c79")),
      link_url:     None,
      tags:         Some(strings(&["Professor", "Guide"])),
      date:         None,
      author:       None,
      extra:        Map::new(),
    },
    Item {
      id:           "a3".into(),
      title:        "Exceptional Problem Solver".into(),
      description:  "\"Hriday showed great aptitude for algorithms during the \
                     hackathon.\""
        .into(),
      category:     Category::Academic,
      content_type: ContentType::Review,
      media_url:    Some(String::new()),
      link_url:     None,
      tags:         Some(strings(&["Hackathon"])),
      date:         None,
      author:       Some("Jane Doe, Team Lead".into()),
      extra:        Map::new(),
    },
    // Creative
    Item {
      id:           "3".into(),
      title:        "Cinematic Travel Vlog".into(),
      description:  "A compilation of my travels across the Himalayas, \
                     focusing on color grading and sound design."
        .into(),
      category:     Category::Creative,
      content_type: ContentType::Cinematography,
      media_url:    Some(unsplash("photo-1464822759023-fed622ff2c3b")),
      link_url:     Some("#".into()),
      tags:         Some(strings(&["Editing", "Cinematography", "Premiere Pro"])),
      date:         None,
      author:       None,
      extra:        Map::new(),
    },
    Item {
      id:           "4".into(),
      title:        "Urban Photography Series".into(),
      description:  "Exploring the geometry of city life through a lens.".into(),
      category:     Category::Creative,
      content_type: ContentType::Photography,
      media_url:    Some(unsplash("photo-1449824913935-59a10b8d2000")),
      link_url:     None,
      tags:         Some(strings(&["Photography", "Composition"])),
      date:         None,
      author:       None,
      extra:        Map::new(),
    },
    Item {
      id:           "c1".into(),
      title:        "Neon Nights Edit".into(),
      description:  "A high-energy music video edit with glitch effects.".into(),
      category:     Category::Creative,
      content_type: ContentType::VideoEdit,
      media_url:    Some(unsplash("photo-1535016120720-40c6874c3b1c")),
      link_url:     None,
      tags:         Some(strings(&["After Effects", "VFX"])),
      date:         None,
      author:       None,
      extra:        Map::new(),
    },
    Item {
      id:           "c2".into(),
      title:        "Manali Trip 2023".into(),
      description:  "Backpacking through the mountains.".into(),
      category:     Category::Creative,
      content_type: ContentType::Trip,
      media_url:    Some(unsplash("photo-1483729558449-99ef09a8c325")),
      link_url:     None,
      tags:         Some(strings(&["Travel", "Vlog"])),
      date:         None,
      author:       None,
      extra:        Map::new(),
    },
  ]
}

fn unsplash(photo: &str) -> String {
  format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&q=80&w=800")
}

fn strings(values: &[&str]) -> Vec<String> {
  values.iter().map(|s| (*s).to_owned()).collect()
}

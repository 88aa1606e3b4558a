use crate::matching::overlap::tags_overlap;

/// Skills overlapping any covered tag come first; original order within each group.
pub fn select_skills(skills: &[String], covered: &[String], max_skills: usize) -> Vec<String> {
    let (prioritized, others): (Vec<&String>, Vec<&String>) = skills
        .iter()
        .partition(|skill| covered.iter().any(|tag| tags_overlap(skill, tag)));

    prioritized
        .into_iter()
        .chain(others)
        .take(max_skills)
        .cloned()
        .collect()
}

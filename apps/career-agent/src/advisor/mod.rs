// Advisors: resume scoring, interview tips, career paths, job search plans.
// Every advisor is a pure function of its input and the reference tables.

pub mod career_paths;
pub mod interview;
pub mod job_search;
pub mod resume;

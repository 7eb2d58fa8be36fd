// All LLM prompt constants for the analysis module.

/// System prompt for the resume analysis step.
pub const RESUME_EXTRACT_SYSTEM: &str =
    "You extract key details from a resume: skills, work history, and notable achievements. \
    Summarize only what the resume states. Do NOT infer or invent details.";

/// System prompt for the job-description analysis step.
pub const JD_EXTRACT_SYSTEM: &str =
    "You extract key details from a job description: required skills, responsibilities, \
    and seniority signals. Summarize only what the description states.";

/// System prompt for the match scoring step.
pub const MATCH_SYSTEM: &str =
    "You determine if the candidate is a match for the job based on extracted details.";

/// Match scoring prompt template. Replace `{resume_info}` and `{jd_info}`
/// before sending. The reply format is what `score::extract_match_result`
/// parses — keep the two in sync.
pub const MATCH_PROMPT_TEMPLATE: &str = "\
You are an AI hiring assistant. Based on the resume info and job description, \
return a percentage score (0-100) indicating how well the resume matches the job. \
Then explain your reasoning. Respond ONLY in the format:

'MATCH SCORE: <score>% - <reason>'

Resume Info:
{resume_info}

Job Description:
{jd_info}";

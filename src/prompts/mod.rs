pub mod pair_engineer_prompt;

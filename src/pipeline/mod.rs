pub mod stage1_scale;
pub mod stage2_normalize;
pub mod stage3_index;
pub mod stage4_verdict;
pub mod stage5_build;
pub mod stage6_rank;

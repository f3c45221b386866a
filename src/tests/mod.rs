

mod kinematics_test;

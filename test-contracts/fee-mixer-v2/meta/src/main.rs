fn main() {
    multiversx_sc_meta_lib::cli_main::<fee_mixer_v2::AbiProvider>();
}

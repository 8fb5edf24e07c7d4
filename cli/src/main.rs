fn main() {
    zipmerge_cli::shared_main()
}

//! Known API commands and typed request construction
//!
//! The catalog is a fixed table: a command name either resolves here or the
//! invocation fails before configuration is read or any request is sent.

use crate::domain::{DomainError, DomainResult, ParameterSet};

/// A remote API operation and the parameters it cannot do without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiCommand {
    pub name: &'static str,
    pub required: &'static [&'static str],
}

/// A validated request for one API command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub command: &'static ApiCommand,
    pub params: ParameterSet,
}

/// The job-status query used by the poller.
pub const QUERY_JOB_RESULT: ApiCommand = ApiCommand {
    name: "queryAsyncJobResult",
    required: &["jobid"],
};

const fn cmd(name: &'static str, required: &'static [&'static str]) -> ApiCommand {
    ApiCommand { name, required }
}

static COMMANDS: &[ApiCommand] = &[
    // Async jobs
    QUERY_JOB_RESULT,
    cmd("listAsyncJobs", &[]),
    // Virtual machines
    cmd("deployVirtualMachine", &["serviceofferingid", "templateid", "zoneid"]),
    cmd("listVirtualMachines", &[]),
    cmd("listVirtualMachinesMetrics", &[]),
    cmd("listVirtualMachinesUsageHistory", &[]),
    cmd("startVirtualMachine", &["id"]),
    cmd("stopVirtualMachine", &["id"]),
    cmd("rebootVirtualMachine", &["id"]),
    cmd("destroyVirtualMachine", &["id"]),
    cmd("expungeVirtualMachine", &["id"]),
    cmd("recoverVirtualMachine", &["id"]),
    cmd("updateVirtualMachine", &["id"]),
    cmd("restoreVirtualMachine", &["virtualmachineid"]),
    cmd("migrateVirtualMachine", &["virtualmachineid"]),
    cmd("migrateVirtualMachineWithVolume", &["virtualmachineid"]),
    cmd("scaleVirtualMachine", &["id", "serviceofferingid"]),
    cmd("changeServiceForVirtualMachine", &["id", "serviceofferingid"]),
    cmd("resetPasswordForVirtualMachine", &["id"]),
    cmd("resetSSHKeyForVirtualMachine", &["id"]),
    cmd("resetUserDataForVirtualMachine", &["id"]),
    cmd("getVMPassword", &["id"]),
    cmd("getVirtualMachineUserData", &["virtualmachineid"]),
    cmd("assignVirtualMachine", &["virtualmachineid"]),
    cmd("importUnmanagedInstance", &["clusterid", "name", "serviceofferingid"]),
    cmd("listUnmanagedInstances", &["clusterid"]),
    cmd("unmanageVirtualMachine", &["id"]),
    cmd("addNicToVirtualMachine", &["networkid", "virtualmachineid"]),
    cmd("removeNicFromVirtualMachine", &["nicid", "virtualmachineid"]),
    cmd("updateDefaultNicForVirtualMachine", &["nicid", "virtualmachineid"]),
    cmd("updateVmNicIp", &["nicid"]),
    cmd("addIpToNic", &["nicid"]),
    cmd("removeIpFromNic", &["id"]),
    cmd("listNics", &["virtualmachineid"]),
    cmd("listInstanceGroups", &[]),
    cmd("createInstanceGroup", &["name"]),
    cmd("updateInstanceGroup", &["id"]),
    cmd("deleteInstanceGroup", &["id"]),
    cmd("startKubernetesCluster", &["id"]),
    cmd("stopKubernetesCluster", &["id"]),
    cmd("createKubernetesCluster", &["name", "zoneid"]),
    cmd("deleteKubernetesCluster", &["id"]),
    cmd("listKubernetesClusters", &[]),
    cmd("scaleKubernetesCluster", &["id"]),
    cmd("upgradeKubernetesCluster", &["id", "kubernetesversionid"]),
    cmd("getKubernetesClusterConfig", &["id"]),
    cmd("listKubernetesSupportedVersions", &[]),
    cmd("addKubernetesSupportedVersion", &["mincpunumber", "minmemory", "semanticversion"]),
    cmd("deleteKubernetesSupportedVersion", &["id"]),
    cmd("updateKubernetesSupportedVersion", &["id", "state"]),
    // VM schedules and user data
    cmd("registerUserData", &["name", "userdata"]),
    cmd("listUserData", &[]),
    cmd("deleteUserData", &["id"]),
    cmd("linkUserDataToTemplate", &[]),
    cmd("createVMSchedule", &["action", "schedule", "timezone", "virtualmachineid"]),
    cmd("listVMSchedule", &["virtualmachineid"]),
    cmd("updateVMSchedule", &["id"]),
    cmd("deleteVMSchedule", &["virtualmachineid"]),
    // Volumes
    cmd("listVolumes", &[]),
    cmd("listVolumesMetrics", &[]),
    cmd("createVolume", &[]),
    cmd("attachVolume", &["id", "virtualmachineid"]),
    cmd("detachVolume", &[]),
    cmd("deleteVolume", &["id"]),
    cmd("destroyVolume", &["id"]),
    cmd("recoverVolume", &["id"]),
    cmd("resizeVolume", &["id"]),
    cmd("updateVolume", &[]),
    cmd("migrateVolume", &["storageid", "volumeid"]),
    cmd("uploadVolume", &["format", "name", "url", "zoneid"]),
    cmd("getUploadParamsForVolume", &["format", "name", "zoneid"]),
    cmd("extractVolume", &["id", "mode", "zoneid"]),
    cmd("changeOfferingForVolume", &["diskofferingid", "id"]),
    cmd("assignVolume", &["volumeid"]),
    cmd("checkVolume", &["id"]),
    // Snapshots
    cmd("createSnapshot", &["volumeid"]),
    cmd("listSnapshots", &[]),
    cmd("deleteSnapshot", &["id"]),
    cmd("revertSnapshot", &["id"]),
    cmd("updateSnapshot", &["id"]),
    cmd("archiveSnapshot", &["id"]),
    cmd("copySnapshot", &["id"]),
    cmd("createSnapshotFromVMSnapshot", &["vmsnapshotid", "volumeid"]),
    cmd("createSnapshotPolicy", &["intervaltype", "maxsnaps", "schedule", "timezone", "volumeid"]),
    cmd("updateSnapshotPolicy", &[]),
    cmd("listSnapshotPolicies", &[]),
    cmd("deleteSnapshotPolicies", &[]),
    cmd("createVMSnapshot", &["virtualmachineid"]),
    cmd("listVMSnapshot", &[]),
    cmd("deleteVMSnapshot", &["vmsnapshotid"]),
    cmd("revertToVMSnapshot", &["vmsnapshotid"]),
    cmd("createBackupSchedule", &["intervaltype", "schedule", "timezone", "virtualmachineid"]),
    cmd("listBackupSchedule", &["virtualmachineid"]),
    cmd("updateBackupSchedule", &["intervaltype", "schedule", "timezone", "virtualmachineid"]),
    cmd("deleteBackupSchedule", &[]),
    cmd("createBackup", &["virtualmachineid"]),
    cmd("listBackups", &[]),
    cmd("deleteBackup", &["id"]),
    cmd("restoreBackup", &["id"]),
    cmd("restoreVolumeFromBackupAndAttachToVM", &["id", "virtualmachineid", "volumeid"]),
    cmd("listBackupOfferings", &[]),
    cmd("importBackupOffering", &["description", "externalid", "name", "zoneid"]),
    cmd("deleteBackupOffering", &["id"]),
    cmd("listBackupProviders", &[]),
    cmd("listBackupProviderOfferings", &["zoneid"]),
    cmd("assignVirtualMachineToBackupOffering", &["backupofferingid", "virtualmachineid"]),
    cmd("removeVirtualMachineFromBackupOffering", &["virtualmachineid"]),
    // Templates and ISOs
    cmd("listTemplates", &["templatefilter"]),
    cmd("registerTemplate", &["format", "hypervisor", "name", "url"]),
    cmd("createTemplate", &["name", "ostypeid"]),
    cmd("updateTemplate", &["id"]),
    cmd("copyTemplate", &["id"]),
    cmd("deleteTemplate", &["id"]),
    cmd("extractTemplate", &["id", "mode"]),
    cmd("prepareTemplate", &["templateid", "zoneid"]),
    cmd("getUploadParamsForTemplate", &["format", "hypervisor", "name", "zoneid"]),
    cmd("listTemplatePermissions", &["id"]),
    cmd("updateTemplatePermissions", &["id"]),
    cmd("listTemplateDirectDownloadCertificates", &[]),
    cmd("listIsos", &[]),
    cmd("registerIso", &["name", "url", "zoneid"]),
    cmd("updateIso", &["id"]),
    cmd("copyIso", &["id"]),
    cmd("attachIso", &["id", "virtualmachineid"]),
    cmd("detachIso", &["virtualmachineid"]),
    cmd("deleteIso", &["id"]),
    cmd("extractIso", &["id", "mode"]),
    cmd("listIsoPermissions", &["id"]),
    cmd("updateIsoPermissions", &["id"]),
    cmd("getUploadParamsForIso", &["name", "zoneid"]),
    cmd("listOsTypes", &[]),
    cmd("listOsCategories", &[]),
    cmd("addGuestOs", &["oscategoryid", "osdisplayname"]),
    cmd("updateGuestOs", &["id", "osdisplayname"]),
    cmd("removeGuestOs", &["id"]),
    cmd("listGuestOsMapping", &[]),
    cmd("addGuestOsMapping", &["hypervisor", "hypervisorversion", "osnameforhypervisor"]),
    cmd("updateGuestOsMapping", &["id", "osnameforhypervisor"]),
    cmd("removeGuestOsMapping", &["id"]),
    // Offerings
    cmd("listServiceOfferings", &[]),
    cmd("createServiceOffering", &["name"]),
    cmd("updateServiceOffering", &["id"]),
    cmd("deleteServiceOffering", &["id"]),
    cmd("listDiskOfferings", &[]),
    cmd("createDiskOffering", &["name"]),
    cmd("updateDiskOffering", &["id"]),
    cmd("deleteDiskOffering", &["id"]),
    cmd("listNetworkOfferings", &[]),
    cmd("createNetworkOffering", &["guestiptype", "name", "traffictype"]),
    cmd("updateNetworkOffering", &[]),
    cmd("deleteNetworkOffering", &["id"]),
    cmd("listVPCOfferings", &[]),
    cmd("createVPCOffering", &["name"]),
    cmd("updateVPCOffering", &["id"]),
    cmd("deleteVPCOffering", &["id"]),
    cmd("listSupportedNetworkServices", &[]),
    // Zones, pods, clusters
    cmd("listZones", &[]),
    cmd("listZonesMetrics", &[]),
    cmd("createZone", &["dns1", "internaldns1", "name", "networktype"]),
    cmd("updateZone", &["id"]),
    cmd("deleteZone", &["id"]),
    cmd("listPods", &[]),
    cmd("createPod", &["name", "zoneid"]),
    cmd("updatePod", &["id"]),
    cmd("deletePod", &["id"]),
    cmd("listClusters", &[]),
    cmd("listClustersMetrics", &[]),
    cmd("addCluster", &["clustername", "clustertype", "hypervisor", "podid", "zoneid"]),
    cmd("updateCluster", &["id"]),
    cmd("deleteCluster", &["id"]),
    cmd("listDedicatedZones", &[]),
    cmd("dedicateZone", &["domainid", "zoneid"]),
    cmd("releaseDedicatedZone", &["zoneid"]),
    cmd("listDedicatedPods", &[]),
    cmd("dedicatePod", &["domainid", "podid"]),
    cmd("releaseDedicatedPod", &["podid"]),
    cmd("listDedicatedClusters", &[]),
    cmd("dedicateCluster", &["clusterid", "domainid"]),
    cmd("releaseDedicatedCluster", &["clusterid"]),
    cmd("listDedicatedHosts", &[]),
    cmd("dedicateHost", &["domainid", "hostid"]),
    cmd("releaseDedicatedHost", &["hostid"]),
    cmd("listRegions", &[]),
    cmd("addRegion", &["endpoint", "id", "name"]),
    cmd("updateRegion", &["id"]),
    cmd("removeRegion", &["id"]),
    cmd("listHypervisors", &[]),
    cmd("listHypervisorCapabilities", &[]),
    cmd("updateHypervisorCapabilities", &[]),
    // Hosts
    cmd("listHosts", &[]),
    cmd("listHostsMetrics", &[]),
    cmd("addHost", &["hypervisor", "podid", "url", "zoneid"]),
    cmd("updateHost", &["id"]),
    cmd("deleteHost", &["id"]),
    cmd("reconnectHost", &["id"]),
    cmd("prepareHostForMaintenance", &["id"]),
    cmd("cancelHostMaintenance", &["id"]),
    cmd("findHostsForMigration", &["id"]),
    cmd("listHostTags", &[]),
    cmd("updateHostPassword", &["password", "username"]),
    cmd("addBaremetalHost", &["hypervisor", "podid", "url", "zoneid"]),
    cmd(
        "configureOutOfBandManagement",
        &["address", "driver", "hostid", "password", "port", "username"],
    ),
    cmd("enableOutOfBandManagementForHost", &["hostid"]),
    cmd("disableOutOfBandManagementForHost", &["hostid"]),
    cmd("issueOutOfBandManagementPowerAction", &["action", "hostid"]),
    cmd("configureHAForHost", &["hostid", "provider"]),
    cmd("enableHAForHost", &["hostid"]),
    cmd("disableHAForHost", &["hostid"]),
    cmd("listHostHAResources", &[]),
    cmd("listHostHAProviders", &["hypervisor"]),
    cmd("declareHostAsDegraded", &["id"]),
    cmd("cancelHostAsDegraded", &["id"]),
    // Storage
    cmd("listStoragePools", &[]),
    cmd("listStoragePoolsMetrics", &[]),
    cmd("createStoragePool", &["name", "url", "zoneid"]),
    cmd("updateStoragePool", &["id"]),
    cmd("deleteStoragePool", &["id"]),
    cmd("enableStorageMaintenance", &["id"]),
    cmd("cancelStorageMaintenance", &["id"]),
    cmd("findStoragePoolsForMigration", &["id"]),
    cmd("listStorageProviders", &["type"]),
    cmd("listStorageTags", &[]),
    cmd("syncStoragePool", &["id"]),
    cmd("listStoragePoolObjects", &["id"]),
    cmd("listImageStores", &[]),
    cmd("addImageStore", &["provider"]),
    cmd("deleteImageStore", &["id"]),
    cmd("updateImageStore", &["id", "readonly"]),
    cmd("listImageStoreObjects", &["id"]),
    cmd("migrateSecondaryStorageData", &["destpools", "srcpool"]),
    cmd("listSecondaryStagingStores", &[]),
    cmd("createSecondaryStagingStore", &["url"]),
    cmd("deleteSecondaryStagingStore", &["id"]),
    cmd("listObjectStoragePools", &[]),
    cmd("addObjectStoragePool", &["name", "provider", "url"]),
    cmd("deleteObjectStoragePool", &["id"]),
    cmd("updateObjectStoragePool", &["id"]),
    cmd("listBuckets", &[]),
    cmd("createBucket", &["name", "objectstorageid"]),
    cmd("updateBucket", &["id"]),
    cmd("deleteBucket", &["id"]),
    // System VMs and routers
    cmd("listSystemVms", &[]),
    cmd("startSystemVm", &["id"]),
    cmd("stopSystemVm", &["id"]),
    cmd("rebootSystemVm", &["id"]),
    cmd("destroySystemVm", &["id"]),
    cmd("migrateSystemVm", &["virtualmachineid"]),
    cmd("changeServiceForSystemVm", &["id", "serviceofferingid"]),
    cmd("scaleSystemVm", &["id", "serviceofferingid"]),
    cmd("listRouters", &[]),
    cmd("startRouter", &["id"]),
    cmd("stopRouter", &["id"]),
    cmd("rebootRouter", &["id"]),
    cmd("destroyRouter", &["id"]),
    cmd("changeServiceForRouter", &["id", "serviceofferingid"]),
    cmd("upgradeRouterTemplate", &[]),
    cmd("getRouterHealthCheckResults", &["routerid"]),
    cmd("listInternalLoadBalancerVMs", &[]),
    cmd("startInternalLoadBalancerVM", &["id"]),
    cmd("stopInternalLoadBalancerVM", &["id"]),
    cmd("listVirtualRouterElements", &[]),
    cmd("configureVirtualRouterElement", &["enabled", "id"]),
    cmd("createVirtualRouterElement", &["nspid"]),
    // Networks
    cmd("listNetworks", &[]),
    cmd("createNetwork", &["name", "networkofferingid", "zoneid"]),
    cmd("updateNetwork", &["id"]),
    cmd("restartNetwork", &["id"]),
    cmd("deleteNetwork", &["id"]),
    cmd("migrateNetwork", &["networkid", "networkofferingid"]),
    cmd("listNetworkServiceProviders", &[]),
    cmd("addNetworkServiceProvider", &["name", "physicalnetworkid"]),
    cmd("updateNetworkServiceProvider", &["id"]),
    cmd("deleteNetworkServiceProvider", &["id"]),
    cmd("listPhysicalNetworks", &[]),
    cmd("createPhysicalNetwork", &["name", "zoneid"]),
    cmd("updatePhysicalNetwork", &["id"]),
    cmd("deletePhysicalNetwork", &["id"]),
    cmd("listTrafficTypes", &["physicalnetworkid"]),
    cmd("addTrafficType", &["physicalnetworkid", "traffictype"]),
    cmd("updateTrafficType", &["id"]),
    cmd("deleteTrafficType", &["id"]),
    cmd("listTrafficTypeImplementors", &[]),
    cmd("listVlanIpRanges", &[]),
    cmd("createVlanIpRange", &[]),
    cmd("updateVlanIpRange", &["id"]),
    cmd("deleteVlanIpRange", &["id"]),
    cmd("dedicatePublicIpRange", &["domainid", "id"]),
    cmd("releasePublicIpRange", &["id"]),
    cmd("listGuestVlans", &[]),
    cmd("dedicateGuestVlanRange", &["physicalnetworkid", "vlanrange"]),
    cmd("listDedicatedGuestVlanRanges", &[]),
    cmd("releaseDedicatedGuestVlanRange", &["id"]),
    cmd("listNetworkPermissions", &["networkid"]),
    cmd("createNetworkPermissions", &["networkid"]),
    cmd("removeNetworkPermissions", &["networkid"]),
    cmd("resetNetworkPermissions", &["networkid"]),
    cmd("listNetworkProtocols", &["option"]),
    cmd("listNetworkIsolationMethods", &[]),
    cmd("createGuestNetworkIpv6Prefix", &["prefix", "zoneid"]),
    cmd("listGuestNetworkIpv6Prefixes", &[]),
    cmd("deleteGuestNetworkIpv6Prefix", &["id"]),
    cmd("listIpv6FirewallRules", &[]),
    cmd("createIpv6FirewallRule", &["networkid", "protocol"]),
    cmd("updateIpv6FirewallRule", &["id"]),
    cmd("deleteIpv6FirewallRule", &["id"]),
    cmd("createManagementNetworkIpRange", &["gateway", "netmask", "podid", "startip"]),
    cmd("deleteManagementNetworkIpRange", &["endip", "podid", "startip", "vlan"]),
    cmd("createStorageNetworkIpRange", &["gateway", "netmask", "podid", "startip"]),
    cmd("listStorageNetworkIpRange", &[]),
    cmd("updateStorageNetworkIpRange", &["id"]),
    cmd("deleteStorageNetworkIpRange", &["id"]),
    // VPCs
    cmd("listVPCs", &[]),
    cmd("createVPC", &["cidr", "name", "vpcofferingid", "zoneid"]),
    cmd("updateVPC", &["id"]),
    cmd("restartVPC", &["id"]),
    cmd("deleteVPC", &["id"]),
    cmd("listPrivateGateways", &[]),
    cmd("createPrivateGateway", &["gateway", "ipaddress", "netmask", "vpcid"]),
    cmd("deletePrivateGateway", &["id"]),
    cmd("listStaticRoutes", &[]),
    cmd("createStaticRoute", &["cidr"]),
    cmd("deleteStaticRoute", &["id"]),
    cmd("listNetworkACLLists", &[]),
    cmd("createNetworkACLList", &["name", "vpcid"]),
    cmd("updateNetworkACLList", &["id"]),
    cmd("deleteNetworkACLList", &["id"]),
    cmd("replaceNetworkACLList", &["aclid"]),
    cmd("listNetworkACLs", &[]),
    cmd("createNetworkACL", &["protocol"]),
    cmd("updateNetworkACLItem", &["id"]),
    cmd("deleteNetworkACL", &["id"]),
    cmd("moveNetworkAclItem", &["id"]),
    cmd("listVpnGateways", &[]),
    cmd("createVpnGateway", &["vpcid"]),
    cmd("deleteVpnGateway", &["id"]),
    cmd("listVpnCustomerGateways", &[]),
    cmd("createVpnCustomerGateway", &["cidrlist", "esppolicy", "gateway", "ikepolicy", "ipsecpsk"]),
    cmd(
        "updateVpnCustomerGateway",
        &["cidrlist", "esppolicy", "gateway", "id", "ikepolicy", "ipsecpsk"],
    ),
    cmd("deleteVpnCustomerGateway", &["id"]),
    cmd("listVpnConnections", &[]),
    cmd("createVpnConnection", &["s2scustomergatewayid", "s2svpngatewayid"]),
    cmd("updateVpnConnection", &["id"]),
    cmd("resetVpnConnection", &["id"]),
    cmd("deleteVpnConnection", &["id"]),
    cmd("listRemoteAccessVpns", &[]),
    cmd("createRemoteAccessVpn", &["publicipid"]),
    cmd("updateRemoteAccessVpn", &["id"]),
    cmd("deleteRemoteAccessVpn", &["publicipid"]),
    cmd("listVpnUsers", &[]),
    cmd("addVpnUser", &["password", "username"]),
    cmd("removeVpnUser", &["username"]),
    // Public IP addresses and NAT
    cmd("listPublicIpAddresses", &[]),
    cmd("associateIpAddress", &[]),
    cmd("disassociateIpAddress", &["id"]),
    cmd("updateIpAddress", &["id"]),
    cmd("reserveIpAddress", &["id"]),
    cmd("releaseIpAddress", &["id"]),
    cmd("enableStaticNat", &["ipaddressid", "virtualmachineid"]),
    cmd("disableStaticNat", &["ipaddressid"]),
    cmd("listPortableIpRanges", &[]),
    cmd("createPortableIpRange", &["endip", "gateway", "netmask", "regionid", "startip"]),
    cmd("deletePortableIpRange", &["id"]),
    // Firewall and port forwarding
    cmd("listFirewallRules", &[]),
    cmd("createFirewallRule", &["ipaddressid", "protocol"]),
    cmd("updateFirewallRule", &["id"]),
    cmd("deleteFirewallRule", &["id"]),
    cmd("listEgressFirewallRules", &[]),
    cmd("createEgressFirewallRule", &["networkid", "protocol"]),
    cmd("updateEgressFirewallRule", &["id"]),
    cmd("deleteEgressFirewallRule", &["id"]),
    cmd("listPortForwardingRules", &[]),
    cmd(
        "createPortForwardingRule",
        &["ipaddressid", "privateport", "protocol", "publicport", "virtualmachineid"],
    ),
    cmd("updatePortForwardingRule", &["id"]),
    cmd("deletePortForwardingRule", &["id"]),
    cmd("listRoutingFirewallRules", &[]),
    cmd("createRoutingFirewallRule", &["networkid", "protocol"]),
    cmd("updateRoutingFirewallRule", &["id"]),
    cmd("deleteRoutingFirewallRule", &["id"]),
    // Load balancing
    cmd("listLoadBalancerRules", &[]),
    cmd("createLoadBalancerRule", &["algorithm", "name", "privateport", "publicport"]),
    cmd("updateLoadBalancerRule", &["id"]),
    cmd("deleteLoadBalancerRule", &["id"]),
    cmd("assignToLoadBalancerRule", &["id"]),
    cmd("removeFromLoadBalancerRule", &["id"]),
    cmd("listLoadBalancerRuleInstances", &["id"]),
    cmd("listLoadBalancers", &[]),
    cmd(
        "createLoadBalancer",
        &[
            "algorithm",
            "instanceport",
            "name",
            "networkid",
            "scheme",
            "sourceipaddressnetworkid",
            "sourceport",
        ],
    ),
    cmd("updateLoadBalancer", &["id"]),
    cmd("deleteLoadBalancer", &["id"]),
    cmd("listLBStickinessPolicies", &[]),
    cmd("createLBStickinessPolicy", &["lbruleid", "methodname", "name"]),
    cmd("updateLBStickinessPolicy", &["id"]),
    cmd("deleteLBStickinessPolicy", &["id"]),
    cmd("listLBHealthCheckPolicies", &[]),
    cmd("createLBHealthCheckPolicy", &["lbruleid"]),
    cmd("updateLBHealthCheckPolicy", &["id"]),
    cmd("deleteLBHealthCheckPolicy", &["id"]),
    cmd("listSslCerts", &[]),
    cmd("uploadSslCert", &["certificate", "name", "privatekey"]),
    cmd("deleteSslCert", &["id"]),
    cmd("assignCertToLoadBalancer", &["certid", "lbruleid"]),
    cmd("removeCertFromLoadBalancer", &["lbruleid"]),
    cmd("listGlobalLoadBalancerRules", &[]),
    cmd("createGlobalLoadBalancerRule", &["gslbdomainname", "gslbservicetype", "name", "regionid"]),
    cmd("updateGlobalLoadBalancerRule", &["id"]),
    cmd("deleteGlobalLoadBalancerRule", &["id"]),
    cmd("assignToGlobalLoadBalancerRule", &["id", "loadbalancerrulelist"]),
    cmd("removeFromGlobalLoadBalancerRule", &["id", "loadbalancerrulelist"]),
    // Autoscaling
    cmd("listAutoScaleVmGroups", &[]),
    cmd(
        "createAutoScaleVmGroup",
        &[
            "lbruleid",
            "maxmembers",
            "minmembers",
            "scaledownpolicyids",
            "scaleuppolicyids",
            "vmprofileid",
        ],
    ),
    cmd("updateAutoScaleVmGroup", &["id"]),
    cmd("enableAutoScaleVmGroup", &["id"]),
    cmd("disableAutoScaleVmGroup", &["id"]),
    cmd("deleteAutoScaleVmGroup", &["id"]),
    cmd("listAutoScaleVmProfiles", &[]),
    cmd("createAutoScaleVmProfile", &["serviceofferingid", "templateid", "zoneid"]),
    cmd("updateAutoScaleVmProfile", &["id"]),
    cmd("deleteAutoScaleVmProfile", &["id"]),
    cmd("listAutoScalePolicies", &[]),
    cmd("createAutoScalePolicy", &["action", "conditionids", "duration"]),
    cmd("updateAutoScalePolicy", &["id"]),
    cmd("deleteAutoScalePolicy", &["id"]),
    cmd("listConditions", &[]),
    cmd("createCondition", &["counterid", "relationaloperator", "threshold"]),
    cmd("updateCondition", &["id", "relationaloperator", "threshold"]),
    cmd("deleteCondition", &["id"]),
    cmd("listCounters", &[]),
    cmd("createCounter", &["name", "networkprovider", "source", "value"]),
    cmd("deleteCounter", &["id"]),
    // Security groups
    cmd("listSecurityGroups", &[]),
    cmd("createSecurityGroup", &["name"]),
    cmd("updateSecurityGroup", &["id"]),
    cmd("deleteSecurityGroup", &[]),
    cmd("authorizeSecurityGroupIngress", &[]),
    cmd("authorizeSecurityGroupEgress", &[]),
    cmd("revokeSecurityGroupIngress", &["id"]),
    cmd("revokeSecurityGroupEgress", &["id"]),
    // SSH key pairs and affinity groups
    cmd("listSSHKeyPairs", &[]),
    cmd("createSSHKeyPair", &["name"]),
    cmd("registerSSHKeyPair", &["name", "publickey"]),
    cmd("deleteSSHKeyPair", &["name"]),
    cmd("listAffinityGroups", &[]),
    cmd("listAffinityGroupTypes", &[]),
    cmd("createAffinityGroup", &["name", "type"]),
    cmd("deleteAffinityGroup", &[]),
    cmd("updateVMAffinityGroup", &["id"]),
    // Tags and annotations
    cmd("listTags", &[]),
    cmd("createTags", &["resourceids", "resourcetype"]),
    cmd("deleteTags", &["resourceids", "resourcetype"]),
    cmd("listResourceDetails", &["resourcetype"]),
    cmd("addResourceDetail", &["detail", "resourceid", "resourcetype"]),
    cmd("removeResourceDetail", &["resourceid", "resourcetype"]),
    cmd("listAnnotations", &[]),
    cmd("addAnnotation", &[]),
    cmd("removeAnnotation", &["id"]),
    cmd("updateAnnotationVisibility", &["adminsonly", "id"]),
    // Accounts and users
    cmd("listAccounts", &[]),
    cmd("createAccount", &["email", "firstname", "lastname", "password", "username"]),
    cmd("updateAccount", &[]),
    cmd("deleteAccount", &["id"]),
    cmd("enableAccount", &[]),
    cmd("disableAccount", &["lock"]),
    cmd("lockAccount", &["account", "domainid"]),
    cmd("markDefaultZoneForAccount", &["account", "domainid", "zoneid"]),
    cmd("listUsers", &[]),
    cmd("createUser", &["account", "email", "firstname", "lastname", "password", "username"]),
    cmd("updateUser", &["id"]),
    cmd("deleteUser", &["id"]),
    cmd("enableUser", &["id"]),
    cmd("disableUser", &["id"]),
    cmd("lockUser", &["id"]),
    cmd("getUser", &["userapikey"]),
    cmd("getUserKeys", &["id"]),
    cmd("registerUserKeys", &["id"]),
    cmd("moveUser", &["id"]),
    cmd("listUserTwoFactorAuthenticatorProviders", &[]),
    cmd("setupUserTwoFactorAuthentication", &[]),
    cmd("listProjectAccounts", &["projectid"]),
    cmd("addAccountToProject", &["projectid"]),
    cmd("deleteAccountFromProject", &["account", "projectid"]),
    cmd("addUserToProject", &["projectid", "username"]),
    cmd("deleteUserFromProject", &["projectid", "userid"]),
    cmd("listLdapConfigurations", &[]),
    cmd("addLdapConfiguration", &["hostname", "port"]),
    cmd("deleteLdapConfiguration", &["hostname"]),
    cmd("listLdapUsers", &[]),
    cmd("importLdapUsers", &[]),
    cmd("ldapCreateAccount", &["username"]),
    cmd("linkDomainToLdap", &["accounttype", "domainid", "type"]),
    cmd("linkAccountToLdap", &["account", "domainid", "ldapdomain"]),
    // Domains and projects
    cmd("listDomains", &[]),
    cmd("listDomainChildren", &[]),
    cmd("createDomain", &["name"]),
    cmd("updateDomain", &["id"]),
    cmd("deleteDomain", &["id"]),
    cmd("moveDomain", &["domainid", "parentdomainid"]),
    cmd("listProjects", &[]),
    cmd("createProject", &["name"]),
    cmd("updateProject", &["id"]),
    cmd("deleteProject", &["id"]),
    cmd("activateProject", &["id"]),
    cmd("suspendProject", &["id"]),
    cmd("listProjectInvitations", &[]),
    cmd("updateProjectInvitation", &["projectid"]),
    cmd("deleteProjectInvitation", &["id"]),
    cmd("listProjectRoles", &["projectid"]),
    cmd("createProjectRole", &["name", "projectid"]),
    cmd("updateProjectRole", &["id", "projectid"]),
    cmd("deleteProjectRole", &["id", "projectid"]),
    cmd("listProjectRolePermissions", &["projectid"]),
    cmd("createProjectRolePermission", &["permission", "projectid", "projectroleid", "rule"]),
    cmd("updateProjectRolePermission", &["projectid", "projectroleid"]),
    cmd("deleteProjectRolePermission", &["id", "projectid"]),
    // Roles
    cmd("listRoles", &[]),
    cmd("createRole", &["name"]),
    cmd("updateRole", &["id"]),
    cmd("deleteRole", &["id"]),
    cmd("importRole", &["name", "rules"]),
    cmd("enableRole", &["id"]),
    cmd("disableRole", &["id"]),
    cmd("listRolePermissions", &[]),
    cmd("createRolePermission", &["permission", "roleid", "rule"]),
    cmd("updateRolePermission", &["roleid"]),
    cmd("deleteRolePermission", &["id"]),
    // Limits, quotas and usage
    cmd("listResourceLimits", &[]),
    cmd("updateResourceLimit", &["resourcetype"]),
    cmd("updateResourceCount", &["domainid"]),
    cmd("listResourceCount", &[]),
    cmd("listCapacity", &[]),
    cmd("listUsageRecords", &["enddate", "startdate"]),
    cmd("listUsageTypes", &[]),
    cmd("generateUsageRecords", &[]),
    cmd("removeRawUsageRecords", &["interval"]),
    cmd("listUsageServerMetrics", &[]),
    cmd("quotaSummary", &[]),
    cmd("quotaBalance", &["account", "domainid"]),
    cmd("quotaStatement", &["account", "domainid", "enddate", "startdate"]),
    cmd("quotaCredits", &["account", "domainid", "value"]),
    cmd("quotaIsEnabled", &[]),
    cmd("quotaTariffList", &[]),
    cmd("quotaTariffCreate", &["name", "usagetype", "value"]),
    cmd("quotaTariffUpdate", &["name"]),
    cmd("quotaTariffDelete", &["id"]),
    cmd("quotaUpdate", &[]),
    cmd("quotaEmailTemplateList", &[]),
    cmd("quotaEmailTemplateUpdate", &["templatebody", "templatesubject", "templatetype"]),
    // Configuration
    cmd("listConfigurations", &[]),
    cmd("updateConfiguration", &["name"]),
    cmd("resetConfiguration", &["name"]),
    cmd("listConfigurationGroups", &[]),
    cmd("listDeploymentPlanners", &[]),
    cmd("listCapabilities", &[]),
    cmd("listApis", &[]),
    cmd("listInfrastructure", &[]),
    cmd("getCloudIdentifier", &["userid"]),
    cmd("listManagementServers", &[]),
    cmd("listManagementServersMetrics", &[]),
    cmd("listDbMetrics", &[]),
    cmd("listSystemVmsUsageHistory", &[]),
    cmd("createSecondaryStorageSelector", &["heuristicrule", "name", "purpose", "zoneid"]),
    cmd("listSecondaryStorageSelectors", &["zoneid"]),
    cmd("updateSecondaryStorageSelector", &["heuristicrule", "id"]),
    cmd("removeSecondaryStorageSelector", &["id"]),
    // Events and alerts
    cmd("listEvents", &[]),
    cmd("listEventTypes", &[]),
    cmd("archiveEvents", &[]),
    cmd("deleteEvents", &[]),
    cmd("listAlerts", &[]),
    cmd("listAlertTypes", &[]),
    cmd("archiveAlerts", &[]),
    cmd("deleteAlerts", &[]),
    cmd("generateAlert", &["description", "name", "type"]),
    // Webhooks and certificates
    cmd("listWebhooks", &[]),
    cmd("createWebhook", &["name", "payloadurl"]),
    cmd("updateWebhook", &["id"]),
    cmd("deleteWebhook", &["id"]),
    cmd("listWebhookDeliveries", &[]),
    cmd("deleteWebhookDelivery", &[]),
    cmd("executeWebhookDelivery", &[]),
    cmd("listCAProviders", &[]),
    cmd("listCaCertificate", &[]),
    cmd("issueCertificate", &[]),
    cmd("provisionCertificate", &["hostid"]),
    cmd("revokeCertificate", &["serial"]),
    cmd("uploadCustomCertificate", &["certificate", "domainsuffix"]),
    cmd(
        "uploadTemplateDirectDownloadCertificate",
        &["certificate", "hypervisor", "name", "zoneid"],
    ),
    cmd("revokeTemplateDirectDownloadCertificate", &[]),
    // Console and diagnostics
    cmd("createConsoleEndpoint", &["virtualmachineid"]),
    cmd("runDiagnostics", &["ipaddress", "targetid", "type"]),
    cmd("getDiagnosticsData", &["targetid"]),
];

impl ApiCommand {
    /// Resolve a command by its exact API name.
    pub fn lookup(name: &str) -> DomainResult<&'static ApiCommand> {
        COMMANDS
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| DomainError::UnknownCommand(name.to_string()))
    }

    /// All known commands, in catalog order.
    pub fn all() -> &'static [ApiCommand] {
        COMMANDS
    }

    /// Commands with "Async" in their name are job queries themselves and are never polled.
    pub fn is_job_query(&self) -> bool {
        self.name.contains("Async")
    }

    /// Check required parameters and bind them into a request.
    pub fn request(&'static self, params: ParameterSet) -> DomainResult<ApiRequest> {
        if let Some(missing) = self.required.iter().find(|p| !params.contains_key(p)) {
            return Err(DomainError::MissingParameter {
                command: self.name.to_string(),
                parameter: missing.to_string(),
            });
        }
        Ok(ApiRequest {
            command: self,
            params,
        })
    }
}

impl ApiRequest {
    pub fn name(&self) -> &'static str {
        self.command.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique() {
        let names: HashSet<_> = COMMANDS.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), COMMANDS.len());
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(ApiCommand::lookup("listZones").is_ok());
        assert_eq!(
            ApiCommand::lookup("listzones"),
            Err(DomainError::UnknownCommand("listzones".into()))
        );
    }

    #[test]
    fn test_job_query_detection() {
        assert!(QUERY_JOB_RESULT.is_job_query());
        assert!(ApiCommand::lookup("listAsyncJobs").unwrap().is_job_query());
        assert!(!ApiCommand::lookup("deployVirtualMachine").unwrap().is_job_query());
    }

    #[test]
    fn test_missing_required_parameter() {
        let command = ApiCommand::lookup("startVirtualMachine").unwrap();

        let err = command.request(ParameterSet::new()).unwrap_err();

        assert_eq!(
            err,
            DomainError::MissingParameter {
                command: "startVirtualMachine".into(),
                parameter: "id".into(),
            }
        );
        assert!(command.request(ParameterSet::new().with("id", "vm-1")).is_ok());
    }
}

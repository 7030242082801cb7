<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Auto-tag on upload toggle switch</description>
   <name>chk_AutoTag</name>
   <tag></tag>
   <elementGuidId>upload-autotag-toggle</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//input[@type='checkbox' and ancestor::*[contains(text(), 'Auto-tag')]]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[data-testid='autotag-toggle'], input[type='checkbox']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
